//! Data models shared across database access and API handlers.

pub mod barcode;
pub mod fields;
pub mod inspection;
pub mod reference;
