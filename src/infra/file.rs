use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::domain::change::{ChangelogResult, FileChangelog};
use crate::error::AppResult;
use crate::services::ChangelogPublisher;

pub const VERSION_PLACEHOLDER: &str = "{version}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogFormat {
    Text,
    Markdown,
}

impl ChangelogFormat {
    pub fn from_filename(filename: &str) -> Self {
        let is_markdown = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
        if is_markdown {
            ChangelogFormat::Markdown
        } else {
            ChangelogFormat::Text
        }
    }
}

pub struct ChangelogFileWriter {
    directory: PathBuf,
    filename_template: String,
}

impl ChangelogFileWriter {
    pub fn new(directory: PathBuf, filename_template: String) -> Self {
        Self {
            directory,
            filename_template,
        }
    }

    pub fn target_path(&self, version: &str) -> PathBuf {
        self.directory
            .join(self.filename_template.replace(VERSION_PLACEHOLDER, version))
    }
}

#[async_trait]
impl ChangelogPublisher for ChangelogFileWriter {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn publish(&self, result: &ChangelogResult) -> AppResult<()> {
        let format = ChangelogFormat::from_filename(&self.filename_template);
        let contents = render_changelog(format, &result.version, &result.changed_files);
        let path = self.target_path(&result.version);

        fs::create_dir_all(&self.directory).await?;
        fs::write(&path, contents).await?;

        info!(path = %path.display(), "changelog written");
        Ok(())
    }
}

pub fn render_changelog(format: ChangelogFormat, version: &str, changelog: &FileChangelog) -> String {
    let mut out = match format {
        ChangelogFormat::Markdown => format!("# Changelog for release {version}\n\n"),
        ChangelogFormat::Text => format!("Changelog for release {version}\n\n"),
    };

    out.push_str(&render_section(format, "Added files", &changelog.added));
    out.push_str(&render_section(format, "Removed files", &changelog.removed));
    out.push_str(&render_section(format, "Modified files", &changelog.modified));
    out
}

fn render_section(format: ChangelogFormat, title: &str, files: &[String]) -> String {
    if files.is_empty() {
        return String::new();
    }

    let lines = match format {
        ChangelogFormat::Markdown => files
            .iter()
            .map(|file| format!("* {file}"))
            .collect::<Vec<_>>(),
        ChangelogFormat::Text => files
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let branch = if i == files.len() - 1 { '└' } else { '├' };
                format!(" {branch} {file}")
            })
            .collect::<Vec<_>>(),
    };

    match format {
        ChangelogFormat::Markdown => format!("## {title}:\n{}\n\n", lines.join("\n")),
        ChangelogFormat::Text => format!("{title}:\n{}\n\n", lines.join("\n")),
    }
}
