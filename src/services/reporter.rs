/// Sink for the human-readable status messages emitted while a run decides
/// what to do.
pub trait StatusReporter: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
