use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::{ChangelogPublisher, RepositoryService, StatusReporter};

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub repository: Arc<dyn RepositoryService>,
    pub reporter: Arc<dyn StatusReporter>,
    /// Dispatched in order once a changelog has been computed.
    pub publishers: Vec<Arc<dyn ChangelogPublisher>>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        repository: Arc<dyn RepositoryService>,
        reporter: Arc<dyn StatusReporter>,
        publishers: Vec<Arc<dyn ChangelogPublisher>>,
    ) -> Self {
        Self {
            config,
            repository,
            reporter,
            publishers,
        }
    }
}
