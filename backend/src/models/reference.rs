use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Production order row from `dados_uso_geral.dados_op`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OrderMetadata {
    pub codigo_veiculo: Option<String>,
    pub modelo: Option<String>,
    pub produto: Option<String>,
    pub sensor: Option<String>,
}

/// Defect types are returned as objects, unlike the other name lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DefectType {
    pub tipo_defeito: String,
}

/// Order numbers arrive as text (URL segment or barcode suffix, often
/// zero-padded) and are matched numerically. Anything but digits matches no
/// order.
pub fn parse_order_number(raw: &str) -> Option<i64> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
