use axum::{
    extract::State,
    Json,
};
use serde_json::{Map, Value};
use validator::Validate;

use crate::{
    error::AppError,
    handlers::{
        extract::{AppJson, AppPath, AppQuery},
        Lookup,
    },
    models::{
        fields::InspectionFields,
        inspection::{
            InspectionListFilter, InspectionListQuery, InspectionSummary, MutationResponse,
        },
    },
    repositories::InspectionRepository,
    services::InspectionService,
    state::AppState,
};

pub async fn list_inspections(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<InspectionListQuery>,
) -> Result<Json<Vec<InspectionSummary>>, AppError> {
    query.validate()?;
    let filter = InspectionListFilter::try_from(query)?;

    let rows = InspectionRepository::new(state.scope())
        .list(&state.pool, &filter)
        .await?;
    tracing::debug!(
        tab = filter.tab.as_str(),
        search = filter.search.as_deref().unwrap_or_default(),
        count = rows.len(),
        "Listed inspections"
    );
    Ok(Json(rows))
}

pub async fn get_inspection(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<Lookup<Value>>, AppError> {
    let record = InspectionRepository::new(state.scope())
        .find_by_id(&state.pool, id)
        .await?;
    Ok(Json(record.into()))
}

pub async fn create_inspection(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<Json<MutationResponse>, AppError> {
    let fields = InspectionFields::try_from(payload)?;
    let id = InspectionService::new(&state.pool, state.scope())
        .create(fields)
        .await?;
    Ok(Json(MutationResponse::created(id)))
}

pub async fn update_inspection(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<Map<String, Value>>,
) -> Result<Json<MutationResponse>, AppError> {
    let fields = InspectionFields::try_from(payload)?;
    InspectionService::new(&state.pool, state.scope())
        .update(id, fields)
        .await?;
    Ok(Json(MutationResponse::ok()))
}

pub async fn delete_inspection(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MutationResponse>, AppError> {
    InspectionService::new(&state.pool, state.scope())
        .delete(id)
        .await?;
    Ok(Json(MutationResponse::ok()))
}
