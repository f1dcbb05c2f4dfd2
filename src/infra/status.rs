use tracing::{error, info};

use crate::services::StatusReporter;

/// Forwards status messages to the installed `tracing` subscriber.
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}
