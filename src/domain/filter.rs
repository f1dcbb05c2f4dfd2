use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::domain::change::FileChangelog;
use crate::error::{AppError, AppResult};

/// Combined matcher over the configured ignore globs.
///
/// `*` stops at `/` while `**` crosses directories. Dot-files are matched like
/// any other path.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    matcher: Option<GlobSet>,
}

impl IgnoreFilter {
    pub fn new(patterns: &[String]) -> AppResult<Self> {
        if patterns.is_empty() {
            return Ok(Self { matcher: None });
        }

        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|source| AppError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }

        let matcher = builder.build().map_err(|err| {
            AppError::Configuration(format!("failed to build ignore matcher: {err}"))
        })?;

        Ok(Self {
            matcher: Some(matcher),
        })
    }

    pub fn is_ignored(&self, path: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|matcher| matcher.is_match(path))
    }

    pub fn apply(&self, changelog: FileChangelog) -> FileChangelog {
        if self.matcher.is_none() {
            return changelog;
        }

        FileChangelog {
            added: self.retain_kept(changelog.added),
            removed: self.retain_kept(changelog.removed),
            modified: self.retain_kept(changelog.modified),
        }
    }

    fn retain_kept(&self, mut paths: Vec<String>) -> Vec<String> {
        paths.retain(|path| !self.is_ignored(path));
        paths
    }
}
