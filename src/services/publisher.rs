use async_trait::async_trait;

use crate::domain::change::ChangelogResult;
use crate::error::AppResult;

#[async_trait]
pub trait ChangelogPublisher: Send + Sync {
    /// Short label used in status output, e.g. `webhook`.
    fn name(&self) -> &'static str;
    async fn publish(&self, result: &ChangelogResult) -> AppResult<()>;
}
