//! Final inspection backend: inspection records of the Jarinu plant plus the
//! reference lookups the inspection form needs.

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
