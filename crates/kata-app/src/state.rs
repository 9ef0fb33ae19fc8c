use std::sync::Arc;

use kata_config::Config;
use kata_core::{Analyzer, DocumentStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Config,
    pub analyzer: Arc<Analyzer>,
    pub store: RwLock<DocumentStore>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let analyzer = Analyzer::new(&config.analysis, &config.text)?;

        Ok(Self {
            config,
            analyzer: Arc::new(analyzer),
            store: RwLock::new(DocumentStore::new()),
        })
    }
}
