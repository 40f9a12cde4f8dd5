use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, docs::ApiDoc, handlers, middleware, state::AppState};

/// JSON API routes, one per record access operation.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/inspecoes",
            get(handlers::list_inspections).post(handlers::create_inspection),
        )
        .route(
            "/api/inspecoes/{id}",
            get(handlers::get_inspection)
                .put(handlers::update_inspection)
                .delete(handlers::delete_inspection),
        )
        .route("/api/dados-op/{op}", get(handlers::get_order_metadata))
        .route("/api/operadores", get(handlers::list_operators))
        .route("/api/lideres", get(handlers::list_leaders))
        .route("/api/tipos-defeitos", get(handlers::list_defect_types))
        .route(
            "/api/descricoes-defeitos/{tipo_defeito}",
            get(handlers::list_defect_descriptions),
        )
        .route("/api/codigo-barras/{codigo}", get(handlers::decode_barcode))
        .with_state(state)
}

/// Full application: API, Swagger UI and the shared layers.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .merge(api_router(state))
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(axum_middleware::from_fn(middleware::log_error_responses)),
        )
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60))
}
