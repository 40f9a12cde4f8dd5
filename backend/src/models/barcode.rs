use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::reference::OrderMetadata;

pub const MIN_BARCODE_LEN: usize = 8;
const PART_PREFIX_LEN: usize = 3;
const ORDER_SUFFIX_LEN: usize = 5;
/// Part code whose description includes the sensor.
const SENSOR_PART: &str = "PBS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BarcodeError {
    #[error("Barcode must have at least {min} characters, got {0}", min = MIN_BARCODE_LEN)]
    TooShort(usize),
}

/// Part code and order number packed in a label barcode: the first three
/// characters name the part, the last five the production order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBarcode {
    pub peca: String,
    pub op: String,
}

impl DecodedBarcode {
    pub fn decode(code: &str) -> Result<Self, BarcodeError> {
        let chars: Vec<char> = code.trim().chars().collect();
        if chars.len() < MIN_BARCODE_LEN {
            return Err(BarcodeError::TooShort(chars.len()));
        }
        Ok(Self {
            peca: chars[..PART_PREFIX_LEN].iter().collect(),
            op: chars[chars.len() - ORDER_SUFFIX_LEN..].iter().collect(),
        })
    }
}

/// Car description stored in `descricao_carro`.
pub fn describe_car(peca: &str, order: &OrderMetadata) -> String {
    let projeto = order.codigo_veiculo.as_deref().unwrap_or_default();
    let veiculo = order.modelo.as_deref().unwrap_or_default();
    let produto = order.produto.as_deref().unwrap_or_default();
    match order.sensor.as_deref().filter(|s| !s.is_empty()) {
        Some(sensor) if peca == SENSOR_PART => format!(
            "{} - Sensor {} - {} - {} - {}",
            peca, sensor, projeto, veiculo, produto
        ),
        _ => format!("{} - {} - {} - {}", peca, projeto, veiculo, produto),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BarcodeLookup {
    pub codigo_de_barras: String,
    pub peca: String,
    pub op: String,
    pub dados_op: Option<OrderMetadata>,
    pub descricao_carro: Option<String>,
}

impl BarcodeLookup {
    pub fn new(code: &str, decoded: DecodedBarcode, order: Option<OrderMetadata>) -> Self {
        let descricao_carro = order
            .as_ref()
            .filter(|o| o.codigo_veiculo.as_deref().is_some_and(|c| !c.is_empty()))
            .map(|o| describe_car(&decoded.peca, o));
        Self {
            codigo_de_barras: code.trim().to_string(),
            peca: decoded.peca,
            op: decoded.op,
            dados_op: order,
            descricao_carro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(sensor: Option<&str>) -> OrderMetadata {
        OrderMetadata {
            codigo_veiculo: Some("484".into()),
            modelo: Some("Hilux".into()),
            produto: Some("Blindagem".into()),
            sensor: sensor.map(str::to_string),
        }
    }

    #[test]
    fn decode_splits_part_and_order() {
        let decoded = DecodedBarcode::decode("PBS0012345").unwrap();
        assert_eq!(decoded.peca, "PBS");
        assert_eq!(decoded.op, "12345");
    }

    #[test]
    fn decode_trims_scanner_whitespace() {
        let decoded = DecodedBarcode::decode("  VGA98765\n").unwrap();
        assert_eq!(decoded.peca, "VGA");
        assert_eq!(decoded.op, "98765");
    }

    #[test]
    fn decode_rejects_short_codes() {
        assert_eq!(
            DecodedBarcode::decode("PBS1234"),
            Err(BarcodeError::TooShort(7))
        );
    }

    #[test]
    fn sensor_is_described_only_for_pbs() {
        assert_eq!(
            describe_car("PBS", &order(Some("S2"))),
            "PBS - Sensor S2 - 484 - Hilux - Blindagem"
        );
        assert_eq!(
            describe_car("VGA", &order(Some("S2"))),
            "VGA - 484 - Hilux - Blindagem"
        );
        assert_eq!(
            describe_car("PBS", &order(Some(""))),
            "PBS - 484 - Hilux - Blindagem"
        );
    }

    #[test]
    fn lookup_without_vehicle_code_has_no_description() {
        let decoded = DecodedBarcode::decode("PBS0012345").unwrap();
        let mut metadata = order(None);
        metadata.codigo_veiculo = None;
        let lookup = BarcodeLookup::new("PBS0012345", decoded.clone(), Some(metadata));
        assert!(lookup.descricao_carro.is_none());

        let lookup = BarcodeLookup::new("PBS0012345", decoded, None);
        assert!(lookup.dados_op.is_none());
        assert!(lookup.descricao_carro.is_none());
    }
}
