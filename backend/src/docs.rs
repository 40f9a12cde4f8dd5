#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    models::{
        barcode::BarcodeLookup,
        inspection::{ApprovalStatus, InspectionListQuery, InspectionSummary, MutationResponse},
        reference::{DefectType, OrderMetadata},
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        list_inspections_doc,
        get_inspection_doc,
        create_inspection_doc,
        update_inspection_doc,
        delete_inspection_doc,
        order_metadata_doc,
        operators_doc,
        leaders_doc,
        defect_types_doc,
        defect_descriptions_doc,
        barcode_doc
    ),
    components(
        schemas(
            // inspections
            InspectionSummary,
            InspectionListQuery,
            ApprovalStatus,
            MutationResponse,
            ErrorResponse,
            // reference data
            OrderMetadata,
            DefectType,
            BarcodeLookup
        )
    ),
    tags(
        (name = "Inspections", description = "Registros de inspeção final"),
        (name = "Reference", description = "Operadores, líderes, defeitos e dados de OP")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/inspecoes",
    params(InspectionListQuery),
    responses(
        (status = 200, description = "Inspeções da aba selecionada", body = [InspectionSummary]),
        (status = 400, description = "Aba desconhecida ou busca inválida", body = ErrorResponse)
    ),
    tag = "Inspections"
)]
fn list_inspections_doc() {}

#[utoipa::path(
    get,
    path = "/api/inspecoes/{id}",
    params(("id" = i32, Path, description = "Inspection id")),
    responses((status = 200, description = "Registro completo, ou {} se inexistente", body = serde_json::Value)),
    tag = "Inspections"
)]
fn get_inspection_doc() {}

#[utoipa::path(
    post,
    path = "/api/inspecoes",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Inspeção criada", body = MutationResponse),
        (status = 400, description = "Coluna inválida ou falha no banco", body = ErrorResponse)
    ),
    tag = "Inspections"
)]
fn create_inspection_doc() {}

#[utoipa::path(
    put,
    path = "/api/inspecoes/{id}",
    params(("id" = i32, Path, description = "Inspection id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Inspeção atualizada", body = MutationResponse),
        (status = 400, description = "Coluna inválida ou falha no banco", body = ErrorResponse)
    ),
    tag = "Inspections"
)]
fn update_inspection_doc() {}

#[utoipa::path(
    delete,
    path = "/api/inspecoes/{id}",
    params(("id" = i32, Path, description = "Inspection id")),
    responses(
        (status = 200, description = "Inspeção removida", body = MutationResponse),
        (status = 400, description = "Falha no banco", body = ErrorResponse)
    ),
    tag = "Inspections"
)]
fn delete_inspection_doc() {}

#[utoipa::path(
    get,
    path = "/api/dados-op/{op}",
    params(("op" = String, Path, description = "Production order number")),
    responses((status = 200, description = "Dados da OP, ou {} se inexistente", body = OrderMetadata)),
    tag = "Reference"
)]
fn order_metadata_doc() {}

#[utoipa::path(
    get,
    path = "/api/operadores",
    responses((status = 200, description = "Operadores da inspeção final", body = [String])),
    tag = "Reference"
)]
fn operators_doc() {}

#[utoipa::path(
    get,
    path = "/api/lideres",
    responses((status = 200, description = "Líderes da inspeção final", body = [String])),
    tag = "Reference"
)]
fn leaders_doc() {}

#[utoipa::path(
    get,
    path = "/api/tipos-defeitos",
    responses((status = 200, body = [DefectType])),
    tag = "Reference"
)]
fn defect_types_doc() {}

#[utoipa::path(
    get,
    path = "/api/descricoes-defeitos/{tipo_defeito}",
    params(("tipo_defeito" = String, Path)),
    responses((status = 200, body = [String])),
    tag = "Reference"
)]
fn defect_descriptions_doc() {}

#[utoipa::path(
    get,
    path = "/api/codigo-barras/{codigo}",
    params(("codigo" = String, Path, description = "Label barcode, at least 8 characters")),
    responses(
        (status = 200, body = BarcodeLookup),
        (status = 400, description = "Código curto demais", body = ErrorResponse)
    ),
    tag = "Reference"
)]
fn barcode_doc() {}
