use tracing::info;

use crate::context::AppContext;
use crate::domain::change::ChangelogResult;
use crate::error::AppResult;
use crate::workflow::changelog::{ChangelogOutcome, compute_changelog};

#[derive(Debug)]
pub enum ReleaseOutcome {
    NothingToReport,
    /// No tags exist; already reported, but the run counts as failed.
    NoTags,
    Published {
        result: ChangelogResult,
        publishers: Vec<&'static str>,
    },
}

impl ReleaseOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ReleaseOutcome::NoTags)
    }
}

/// Computes the changelog and hands it to every configured publisher in
/// order. The first publisher error aborts the run.
pub async fn publish_release(ctx: &AppContext) -> AppResult<ReleaseOutcome> {
    let result = match compute_changelog(ctx).await? {
        ChangelogOutcome::Ready(result) => result,
        ChangelogOutcome::NothingToReport => return Ok(ReleaseOutcome::NothingToReport),
        ChangelogOutcome::NoTags => return Ok(ReleaseOutcome::NoTags),
    };

    let mut published = Vec::with_capacity(ctx.publishers.len());
    for publisher in &ctx.publishers {
        publisher.publish(&result).await?;
        info!(publisher = publisher.name(), version = %result.version, "changelog published");
        published.push(publisher.name());
    }

    Ok(ReleaseOutcome::Published {
        result,
        publishers: published,
    })
}
