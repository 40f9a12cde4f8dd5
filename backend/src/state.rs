use std::sync::Arc;

use crate::{
    config::{Config, PlantScope},
    db::connection::DbPool,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    pub fn scope(&self) -> &PlantScope {
        &self.config.scope
    }
}
