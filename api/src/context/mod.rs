use std::sync::Arc;

use roster_db::storage::Storage;

use crate::config::RosterApiConfig;

#[derive(Clone)]
pub struct ApiContext {
    pub config: RosterApiConfig,
    pub store: Arc<dyn Storage>,
}

impl ApiContext {
    pub fn new(config: RosterApiConfig, store: Arc<dyn Storage>) -> Self {
        Self { config, store }
    }
}
