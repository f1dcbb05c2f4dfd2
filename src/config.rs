use std::path::PathBuf;

use clap::Args;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CHANGELOG_FILENAME: &str = "CHANGELOG-{version}.md";

/// Raw pipeline inputs, taken from flags or the matching environment variables.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigInputs {
    /// Token for the repository API.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Repository in `owner/repo` form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,
    /// Commit the pipeline is running on.
    #[arg(long, env = "GITHUB_SHA")]
    pub sha: Option<String>,
    /// Base URL of the repository API.
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
    /// Chat webhook that receives the changelog.
    #[arg(long, env = "CHANGELOG_WEBHOOK", hide_env_values = true)]
    pub webhook: Option<String>,
    /// Directory the changelog file is written to.
    #[arg(long, env = "CHANGELOG_DIR")]
    pub changelog_dir: Option<PathBuf>,
    /// Changelog filename; `{version}` is replaced with the release tag.
    #[arg(long, env = "CHANGELOG_FILENAME")]
    pub changelog_filename: Option<String>,
    /// Newline-separated globs of paths to leave out of the changelog.
    #[arg(long, env = "CHANGELOG_IGNORE")]
    pub ignore: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub head_sha: String,
    pub api_base_url: String,
    pub webhook_url: Option<String>,
    pub changelog_dir: Option<PathBuf>,
    pub changelog_filename: String,
    pub ignore_patterns: Vec<String>,
}

impl AppConfig {
    pub fn from_inputs(inputs: ConfigInputs) -> AppResult<Self> {
        let token = non_blank(inputs.token)
            .ok_or_else(|| AppError::Configuration("repository token not configured".to_string()))?;
        let repository = non_blank(inputs.repository).ok_or_else(|| {
            AppError::Configuration("repository (owner/repo) not configured".to_string())
        })?;
        let (owner, repo) = parse_repository(&repository)?;
        let head_sha = non_blank(inputs.sha)
            .ok_or_else(|| AppError::Configuration("current commit SHA not configured".to_string()))?;

        let api_base_url = non_blank(inputs.api_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let changelog_filename = non_blank(inputs.changelog_filename)
            .unwrap_or_else(|| DEFAULT_CHANGELOG_FILENAME.to_string());
        let changelog_dir = inputs
            .changelog_dir
            .filter(|dir| !dir.as_os_str().is_empty());

        Ok(Self {
            token,
            owner,
            repo,
            head_sha,
            api_base_url,
            webhook_url: non_blank(inputs.webhook),
            changelog_dir,
            changelog_filename,
            ignore_patterns: parse_ignore_patterns(inputs.ignore.as_deref().unwrap_or_default()),
        })
    }
}

pub fn parse_repository(value: &str) -> AppResult<(String, String)> {
    match value.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(AppError::Configuration(format!(
            "repository must look like owner/repo, got '{value}'"
        ))),
    }
}

pub fn parse_ignore_patterns(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
