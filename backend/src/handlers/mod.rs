use serde::Serialize;

pub mod extract;
pub mod inspections;
pub mod reference;

pub use inspections::*;
pub use reference::*;

/// Single-record lookups answer `{}` rather than 404 when nothing matches.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Missing {},
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(found) => Lookup::Found(found),
            None => Lookup::Missing {},
        }
    }
}
