use async_trait::async_trait;

use crate::domain::change::RawFileChange;
use crate::domain::tag::Tag;
use crate::error::AppResult;

/// Result of comparing two commits. `files` is `None` when the host returned
/// no file list at all, which is distinct from an empty diff.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub files: Option<Vec<RawFileChange>>,
}

#[async_trait]
pub trait RepositoryService: Send + Sync {
    /// Tags ordered newest first.
    async fn list_tags(&self, owner: &str, repo: &str, per_page: u8) -> AppResult<Vec<Tag>>;
    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> AppResult<Comparison>;
}
