//! Open-ended column/value mappings for inspection writes.
//!
//! The checklist table carries dozens of optional columns, so writes accept
//! any subset of them. Column names become identifiers in the statement and
//! are therefore checked for identifier syntax here; values are never
//! interpolated and travel as a single JSON parameter.

use serde_json::{Map, Value};
use std::fmt;

/// PostgreSQL truncates identifiers beyond this length.
const MAX_IDENTIFIER_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid column name: {0:?}")]
    InvalidColumn(String),
    #[error("No fields supplied")]
    Empty,
}

/// A lower-cased SQL identifier naming an inspection column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn parse(raw: &str) -> Result<Self, FieldError> {
        let name = raw.to_ascii_lowercase();
        let mut chars = name.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !valid_start || !valid_rest || name.len() > MAX_IDENTIFIER_LEN {
            return Err(FieldError::InvalidColumn(raw.to_string()));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier quoted for statement text.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Column → value pairs of one create or update request, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InspectionFields {
    entries: Vec<(ColumnName, Value)>,
}

impl InspectionFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column, replacing an earlier value for the same column.
    pub fn insert(&mut self, column: ColumnName, value: Value) {
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c.as_str() == column)
            .map(|(_, v)| v)
    }

    pub fn remove(&mut self, column: &str) -> Option<Value> {
        let idx = self.entries.iter().position(|(c, _)| c.as_str() == column)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnName> {
        self.entries.iter().map(|(c, _)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object consumed by `jsonb_populate_record`, which converts each
    /// value to its column type.
    pub fn to_document(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(c, v)| (c.as_str().to_string(), v.clone()))
            .collect();
        Value::Object(map)
    }
}

impl TryFrom<Map<String, Value>> for InspectionFields {
    type Error = FieldError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut fields = InspectionFields::new();
        for (key, value) in map {
            fields.insert(ColumnName::parse(&key)?, value);
        }
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Result<InspectionFields, FieldError> {
        match value {
            Value::Object(map) => InspectionFields::try_from(map),
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn column_names_are_lowercased() {
        let column = ColumnName::parse("Turno_Mesa").unwrap();
        assert_eq!(column.as_str(), "turno_mesa");
        assert_eq!(column.quoted(), "\"turno_mesa\"");
    }

    #[test]
    fn malformed_column_names_are_rejected() {
        let too_long = "x".repeat(64);
        for raw in [
            "",
            "1serial",
            "serial; DROP TABLE insp_final_checklist",
            "serial\"",
            "peça",
            "op-number",
            too_long.as_str(),
        ] {
            assert_eq!(
                ColumnName::parse(raw),
                Err(FieldError::InvalidColumn(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
        assert!(ColumnName::parse("offset_mm_1").is_ok());
        assert!(ColumnName::parse("_interno").is_ok());
    }

    #[test]
    fn mapping_keeps_request_order_and_values() {
        let parsed = fields(json!({"serial": "S1", "op": 42, "peca": null})).unwrap();
        let columns: Vec<_> = parsed.columns().map(ColumnName::as_str).collect();
        assert_eq!(columns, vec!["serial", "op", "peca"]);
        assert_eq!(parsed.get("op"), Some(&json!(42)));
        assert_eq!(
            parsed.to_document(),
            json!({"serial": "S1", "op": 42, "peca": null})
        );
    }

    #[test]
    fn differently_cased_duplicates_collapse_to_last_value() {
        let parsed = fields(json!({"Serial": "A", "serial": "B"})).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("serial"), Some(&json!("B")));
    }

    #[test]
    fn one_bad_key_rejects_the_whole_mapping() {
        let err = fields(json!({"serial": "S1", "bad name": 1})).unwrap_err();
        assert_eq!(err, FieldError::InvalidColumn("bad name".into()));
    }

    #[test]
    fn remove_drops_the_column() {
        let mut parsed = fields(json!({"serial": "S1", "data_finalizacao": "x"})).unwrap();
        assert_eq!(parsed.remove("data_finalizacao"), Some(json!("x")));
        assert_eq!(parsed.remove("data_finalizacao"), None);
        assert_eq!(parsed.len(), 1);
    }
}
