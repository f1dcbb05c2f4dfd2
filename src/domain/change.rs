#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Removed,
    Modified,
    Renamed,
    Changed,
    /// Any status the classifier does not act on (`copied`, `unchanged`, ...).
    Unknown(String),
}

impl FileStatus {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "added" => FileStatus::Added,
            "removed" => FileStatus::Removed,
            "modified" => FileStatus::Modified,
            "renamed" => FileStatus::Renamed,
            "changed" => FileStatus::Changed,
            _ => FileStatus::Unknown(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFileChange {
    pub path: String,
    pub status: FileStatus,
    pub previous_path: Option<String>,
}

#[cfg(test)]
impl RawFileChange {
    pub fn new(path: impl Into<String>, status: FileStatus) -> Self {
        Self {
            path: path.into(),
            status,
            previous_path: None,
        }
    }

    pub fn renamed(path: impl Into<String>, previous_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Renamed,
            previous_path: Some(previous_path.into()),
        }
    }
}

/// Paths touched between two commits, bucketed by what happened to them.
///
/// Lists keep input order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChangelog {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

impl FileChangelog {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogResult {
    pub version: String,
    pub changed_files: FileChangelog,
}

pub fn classify(changes: &[RawFileChange]) -> FileChangelog {
    let mut changelog = FileChangelog::default();

    for change in changes {
        match (&change.status, &change.previous_path) {
            (FileStatus::Added, _) => changelog.added.push(change.path.clone()),
            (FileStatus::Removed, _) => changelog.removed.push(change.path.clone()),
            (FileStatus::Modified | FileStatus::Changed, _) => {
                changelog.modified.push(change.path.clone())
            }
            (FileStatus::Renamed, Some(previous)) => {
                changelog.removed.push(previous.clone());
                changelog.added.push(change.path.clone());
            }
            (FileStatus::Renamed, None) | (FileStatus::Unknown(_), _) => {}
        }
    }

    changelog
}
