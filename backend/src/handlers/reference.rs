use axum::{
    extract::State,
    Json,
};

use crate::{
    error::AppError,
    handlers::{extract::AppPath, Lookup},
    models::{
        barcode::{BarcodeLookup, DecodedBarcode},
        reference::{DefectType, OrderMetadata},
    },
    repositories::ReferenceRepository,
    state::AppState,
};

pub async fn get_order_metadata(
    State(state): State<AppState>,
    AppPath(op): AppPath<String>,
) -> Result<Json<Lookup<OrderMetadata>>, AppError> {
    let order = ReferenceRepository::new(state.scope())
        .find_order(&state.pool, &op)
        .await?;
    Ok(Json(order.into()))
}

pub async fn list_operators(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = ReferenceRepository::new(state.scope())
        .list_operators(&state.pool)
        .await?;
    Ok(Json(names))
}

pub async fn list_leaders(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let names = ReferenceRepository::new(state.scope())
        .list_leaders(&state.pool)
        .await?;
    Ok(Json(names))
}

pub async fn list_defect_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<DefectType>>, AppError> {
    let types = ReferenceRepository::new(state.scope())
        .list_defect_types(&state.pool)
        .await?;
    Ok(Json(types))
}

pub async fn list_defect_descriptions(
    State(state): State<AppState>,
    AppPath(defect_type): AppPath<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let descriptions = ReferenceRepository::new(state.scope())
        .list_defect_descriptions(&state.pool, &defect_type)
        .await?;
    Ok(Json(descriptions))
}

/// Decodes a label barcode and resolves its production order.
pub async fn decode_barcode(
    State(state): State<AppState>,
    AppPath(code): AppPath<String>,
) -> Result<Json<BarcodeLookup>, AppError> {
    let decoded = DecodedBarcode::decode(&code)?;
    let order = ReferenceRepository::new(state.scope())
        .find_order(&state.pool, &decoded.op)
        .await?;
    Ok(Json(BarcodeLookup::new(&code, decoded, order)))
}
