use tracing::debug;

use crate::context::AppContext;
use crate::domain::change::{ChangelogResult, classify};
use crate::domain::filter::IgnoreFilter;
use crate::domain::tag::{Resolution, resolve};
use crate::error::AppResult;

/// Only the newest tag and the one before it are ever compared.
pub const TAGS_PER_PAGE: u8 = 2;

#[derive(Debug)]
pub enum ChangelogOutcome {
    Ready(ChangelogResult),
    /// Nothing new to describe; the run still succeeds.
    NothingToReport,
    /// The repository has no tags at all; the run must be marked failed.
    NoTags,
}

/// Computes what changed in the release described by the newest tags.
///
/// Returns `NothingToReport` when there is no older release, HEAD is already
/// at the base, or the host sent no file list, and `NoTags` when the
/// repository has no tags. Errors from the repository service are returned
/// untouched.
pub async fn compute_changelog(ctx: &AppContext) -> AppResult<ChangelogOutcome> {
    let config = &ctx.config;
    let reporter = &ctx.reporter;

    // Bad globs should fail the run before any request is made.
    let ignore = IgnoreFilter::new(&config.ignore_patterns)?;

    reporter.info("Fetching latest tags...");
    let tags = ctx
        .repository
        .list_tags(&config.owner, &config.repo, TAGS_PER_PAGE)
        .await?;
    reporter.info(&format!("Fetched {} tags", tags.len()));

    let (previous_tag, base_commit_sha) = match resolve(&tags, &config.head_sha) {
        Err(no_tags) => {
            reporter.error(&no_tags.to_string());
            return Ok(ChangelogOutcome::NoTags);
        }
        Ok(Resolution::Skip(reason)) => {
            reporter.info(reason.message());
            return Ok(ChangelogOutcome::NothingToReport);
        }
        Ok(Resolution::Compare {
            previous_tag,
            base_commit_sha,
        }) => (previous_tag, base_commit_sha),
    };

    reporter.info(&format!("Latest Tag Found: {}", previous_tag.name));
    reporter.info(&format!("Base Commit SHA (Tag): {base_commit_sha}"));
    reporter.info(&format!(
        "Comparing commits between {} and HEAD...",
        previous_tag.name
    ));

    let comparison = ctx
        .repository
        .compare_commits(
            &config.owner,
            &config.repo,
            &base_commit_sha,
            &config.head_sha,
        )
        .await?;

    let Some(files) = comparison.files else {
        reporter.info("No changes found, exiting...");
        return Ok(ChangelogOutcome::NothingToReport);
    };

    let changed_files = ignore.apply(classify(&files));
    debug!(
        added = changed_files.added.len(),
        removed = changed_files.removed.len(),
        modified = changed_files.modified.len(),
        "classified changes"
    );

    Ok(ChangelogOutcome::Ready(ChangelogResult {
        version: previous_tag.name,
        changed_files,
    }))
}
