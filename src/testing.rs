//! In-memory service doubles shared by the workflow tests.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{AppConfig, DEFAULT_API_URL, DEFAULT_CHANGELOG_FILENAME};
use crate::context::AppContext;
use crate::domain::change::{ChangelogResult, RawFileChange};
use crate::domain::tag::Tag;
use crate::error::{AppError, AppResult};
use crate::services::{ChangelogPublisher, Comparison, RepositoryService, StatusReporter};

pub const OWNER: &str = "test-owner";
pub const REPO: &str = "test-repo";
pub const HEAD_SHA: &str = "head-commit-sha";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    ListTags { per_page: u8 },
    CompareCommits { base: String, head: String },
}

pub struct MockRepository {
    tags: Vec<Tag>,
    files: Option<Vec<RawFileChange>>,
    fail_with: Option<String>,
    calls: Mutex<Vec<RepositoryCall>>,
}

impl MockRepository {
    pub fn new(tags: Vec<Tag>, files: Option<Vec<RawFileChange>>) -> Self {
        Self {
            tags,
            files,
            fail_with: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `AppError::Repository(message)`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(Vec::new(), None)
        }
    }

    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn compare_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, RepositoryCall::CompareCommits { .. }))
            .count()
    }

    fn check_failure(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(message) => Err(AppError::Repository(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RepositoryService for MockRepository {
    async fn list_tags(&self, owner: &str, repo: &str, per_page: u8) -> AppResult<Vec<Tag>> {
        assert_eq!((owner, repo), (OWNER, REPO));
        self.calls
            .lock()
            .unwrap()
            .push(RepositoryCall::ListTags { per_page });
        self.check_failure()?;
        Ok(self.tags.iter().take(per_page as usize).cloned().collect())
    }

    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> AppResult<Comparison> {
        assert_eq!((owner, repo), (OWNER, REPO));
        self.calls.lock().unwrap().push(RepositoryCall::CompareCommits {
            base: base.to_string(),
            head: head.to_string(),
        });
        self.check_failure()?;
        Ok(Comparison {
            files: self.files.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logged {
    Info(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<Logged>>,
}

impl RecordingReporter {
    pub fn messages(&self) -> Vec<Logged> {
        self.messages.lock().unwrap().clone()
    }

    pub fn has_info(&self, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|m| matches!(m, Logged::Info(text) if text.contains(needle)))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|m| matches!(m, Logged::Error(text) if text.contains(needle)))
    }
}

impl StatusReporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(Logged::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(Logged::Error(message.to_string()));
    }
}

pub struct RecordingPublisher {
    name: &'static str,
    fail_with: Option<String>,
    published: Mutex<Vec<ChangelogResult>>,
}

impl RecordingPublisher {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fail_with: None,
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &'static str, message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(name)
        }
    }

    pub fn published(&self) -> Vec<ChangelogResult> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangelogPublisher for RecordingPublisher {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn publish(&self, result: &ChangelogResult) -> AppResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Webhook(message.clone()));
        }
        self.published.lock().unwrap().push(result.clone());
        Ok(())
    }
}

pub fn test_config(ignore_patterns: &[&str]) -> AppConfig {
    AppConfig {
        token: "mock-token".to_string(),
        owner: OWNER.to_string(),
        repo: REPO.to_string(),
        head_sha: HEAD_SHA.to_string(),
        api_base_url: DEFAULT_API_URL.to_string(),
        webhook_url: None,
        changelog_dir: None::<PathBuf>,
        changelog_filename: DEFAULT_CHANGELOG_FILENAME.to_string(),
        ignore_patterns: ignore_patterns.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn test_context(
    config: AppConfig,
    repository: Arc<MockRepository>,
    reporter: Arc<RecordingReporter>,
    publishers: Vec<Arc<dyn ChangelogPublisher>>,
) -> AppContext {
    AppContext::new(config, repository, reporter, publishers)
}
