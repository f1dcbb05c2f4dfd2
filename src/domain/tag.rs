use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub commit_sha: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, commit_sha: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_sha: commit_sha.into(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No Git tags found in the repository.")]
pub struct NoTagsFound;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoOtherReleases,
    HeadAtBase,
}

impl SkipReason {
    pub fn message(&self) -> &'static str {
        match self {
            SkipReason::NoOtherReleases => "No other releases to compare",
            SkipReason::HeadAtBase => {
                "The latest tag is the current HEAD. No new commits to compare."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Compare {
        previous_tag: Tag,
        base_commit_sha: String,
    },
    Skip(SkipReason),
}

/// Picks the commit to diff HEAD against.
///
/// `tags` must be newest first. Only the first two entries are consulted: when
/// HEAD already carries the newest tag the release is described relative to
/// the next older tag, otherwise HEAD is compared with the newest tag.
pub fn resolve(tags: &[Tag], current_commit_sha: &str) -> Result<Resolution, NoTagsFound> {
    let latest = tags.first().ok_or(NoTagsFound)?;

    let previous_tag = if latest.commit_sha == current_commit_sha {
        match tags.get(1) {
            Some(older) => older,
            None => return Ok(Resolution::Skip(SkipReason::NoOtherReleases)),
        }
    } else {
        latest
    };

    if previous_tag.commit_sha == current_commit_sha {
        return Ok(Resolution::Skip(SkipReason::HeadAtBase));
    }

    Ok(Resolution::Compare {
        base_commit_sha: previous_tag.commit_sha.clone(),
        previous_tag: previous_tag.clone(),
    })
}
