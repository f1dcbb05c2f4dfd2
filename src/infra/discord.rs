use async_trait::async_trait;
use reqwest::{Client, Url, header::CONTENT_TYPE};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::change::{ChangelogResult, FileChangelog};
use crate::error::{AppError, AppResult};
use crate::services::ChangelogPublisher;

const GREEN: u32 = 0x2ecc71;
const RED: u32 = 0xe74c3c;
const YELLOW: u32 = 0xf1c40f;

pub struct DiscordWebhook {
    http: Client,
    url: Url,
}

impl DiscordWebhook {
    /// Rejects empty, unparsable and non-http(s) URLs before any request is made.
    pub fn new(url: &str) -> AppResult<Self> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidWebhookTarget(
                "webhook URL must not be empty".to_string(),
            ));
        }
        let url = Url::parse(trimmed)
            .map_err(|err| AppError::InvalidWebhookTarget(format!("{trimmed}: {err}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::InvalidWebhookTarget(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }

        Ok(Self {
            http: Client::new(),
            url,
        })
    }

    async fn send(&self, payload: &WebhookPayload) -> AppResult<()> {
        let response = self
            .http
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|err| AppError::Webhook(format!("failed to send webhook: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::Webhook(format!(
                "Failed to send webhook. Status: {status} - Response: {body}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ChangelogPublisher for DiscordWebhook {
    fn name(&self) -> &'static str {
        "webhook"
    }

    async fn publish(&self, result: &ChangelogResult) -> AppResult<()> {
        if result.changed_files.is_empty() {
            info!(version = %result.version, "changelog is empty, webhook not sent");
            return Ok(());
        }

        let payload = WebhookPayload::from_changelog(&result.version, &result.changed_files);
        match self.send(&payload).await {
            Ok(()) => {
                info!("Webhook sent successfully");
                Ok(())
            }
            Err(err) => {
                error!("Error sending Discord webhook: {err}");
                Err(err)
            }
        }
    }
}

#[derive(Serialize, Debug)]
struct WebhookPayload {
    content: String,
    embeds: Vec<Embed>,
}

impl WebhookPayload {
    fn from_changelog(version: &str, changelog: &FileChangelog) -> Self {
        let buckets = [
            ("Added files:", &changelog.added, '+', "32", GREEN),
            ("Removed files:", &changelog.removed, '-', "31", RED),
            ("Modified files:", &changelog.modified, '~', "33", YELLOW),
        ];

        let embeds = buckets
            .into_iter()
            .filter(|(_, files, ..)| !files.is_empty())
            .map(|(title, files, marker, ansi, color)| Embed {
                title: title.to_string(),
                description: ansi_block(files, marker, ansi),
                color,
            })
            .collect();

        Self {
            content: format!("Changelog for release {version}"),
            embeds,
        }
    }
}

#[derive(Serialize, Debug)]
struct Embed {
    title: String,
    description: String,
    color: u32,
}

fn ansi_block(files: &[String], marker: char, ansi: &str) -> String {
    let lines = files
        .iter()
        .map(|file| format!("{marker} {file}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("```ansi\n\u{1b}[0;{ansi}m{lines}\n```")
}
