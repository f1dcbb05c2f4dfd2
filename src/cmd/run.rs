use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::release::{ReleaseOutcome, publish_release};

pub async fn run(ctx: &AppContext) -> AppResult<ReleaseOutcome> {
    publish_release(ctx).await
}

/// Process exit status for a finished run.
pub fn exit_code(outcome: &ReleaseOutcome) -> i32 {
    if outcome.is_failure() { 1 } else { 0 }
}

/// One-line result for stdout. `None` when the outcome was already reported
/// as an error.
pub fn summary(outcome: &ReleaseOutcome) -> Option<String> {
    let line = match outcome {
        ReleaseOutcome::NoTags => return None,
        ReleaseOutcome::NothingToReport => "Nothing to report.".to_string(),
        ReleaseOutcome::Published { result, publishers } => {
            let files = &result.changed_files;
            let mut line = format!(
                "Changelog for {}: {} added, {} removed, {} modified",
                result.version,
                files.added.len(),
                files.removed.len(),
                files.modified.len()
            );
            if !publishers.is_empty() {
                line.push_str(&format!(" (sent to {})", publishers.join(", ")));
            }
            line
        }
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::change::{ChangelogResult, FileChangelog};

    #[test]
    fn summarizes_outcomes() {
        assert_eq!(
            summary(&ReleaseOutcome::NothingToReport).as_deref(),
            Some("Nothing to report.")
        );
        assert_eq!(summary(&ReleaseOutcome::NoTags), None);

        let outcome = ReleaseOutcome::Published {
            result: ChangelogResult {
                version: "v1.0.0".to_string(),
                changed_files: FileChangelog {
                    added: vec!["a".into(), "b".into()],
                    removed: vec![],
                    modified: vec!["c".into()],
                },
            },
            publishers: vec!["webhook", "file"],
        };
        assert_eq!(
            summary(&outcome).as_deref(),
            Some("Changelog for v1.0.0: 2 added, 0 removed, 1 modified (sent to webhook, file)")
        );
        assert_eq!(exit_code(&outcome), 0);
    }

    #[test]
    fn only_missing_tags_fail_the_process() {
        assert_eq!(exit_code(&ReleaseOutcome::NoTags), 1);
        assert_eq!(exit_code(&ReleaseOutcome::NothingToReport), 0);
    }
}
