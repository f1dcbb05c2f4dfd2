use async_trait::async_trait;
use reqwest::{
    Client, Response,
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::change::{FileStatus, RawFileChange};
use crate::domain::tag::Tag;
use crate::error::{AppError, AppResult};
use crate::services::{Comparison, RepositoryService};

const CLIENT_USER_AGENT: &str = concat!("tag-changelog/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    http: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            token,
        }
    }

    fn repo_endpoint(&self, owner: &str, repo: &str, rest: &str) -> String {
        format!(
            "{}/repos/{owner}/{repo}/{rest}",
            self.base_url.trim_end_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> AppResult<T> {
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(|err| AppError::Repository(format!("failed to call GitHub: {err}")))?;

        let response = Self::ensure_success(response).await?;
        response
            .json()
            .await
            .map_err(|err| AppError::Repository(format!("failed to parse GitHub response: {err}")))
    }

    async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unable to read response>".to_string());
        Err(AppError::Repository(format!(
            "GitHub responded with {status}: {body}"
        )))
    }
}

#[async_trait]
impl RepositoryService for GitHubClient {
    async fn list_tags(&self, owner: &str, repo: &str, per_page: u8) -> AppResult<Vec<Tag>> {
        let url = self.repo_endpoint(owner, repo, &format!("tags?per_page={per_page}"));
        let tags: Vec<GitHubTag> = self.get_json(url).await?;
        Ok(tags.into_iter().map(Tag::from).collect())
    }

    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> AppResult<Comparison> {
        let url = self.repo_endpoint(owner, repo, &format!("compare/{base}...{head}"));
        let comparison: GitHubComparison = self.get_json(url).await?;
        Ok(Comparison {
            files: comparison
                .files
                .map(|files| files.into_iter().map(RawFileChange::from).collect()),
        })
    }
}

#[derive(Deserialize)]
struct GitHubTag {
    name: String,
    commit: GitHubCommitRef,
}

#[derive(Deserialize)]
struct GitHubCommitRef {
    sha: String,
}

impl From<GitHubTag> for Tag {
    fn from(tag: GitHubTag) -> Self {
        Tag::new(tag.name, tag.commit.sha)
    }
}

#[derive(Deserialize)]
struct GitHubComparison {
    files: Option<Vec<GitHubDiffEntry>>,
}

#[derive(Deserialize)]
struct GitHubDiffEntry {
    filename: String,
    status: String,
    previous_filename: Option<String>,
}

impl From<GitHubDiffEntry> for RawFileChange {
    fn from(entry: GitHubDiffEntry) -> Self {
        RawFileChange {
            path: entry.filename,
            status: FileStatus::parse(&entry.status),
            previous_path: entry.previous_filename,
        }
    }
}
