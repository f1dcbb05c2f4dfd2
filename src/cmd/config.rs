use crate::config::AppConfig;

pub fn run_show(cfg: &AppConfig) {
    for line in describe(cfg) {
        println!("{line}");
    }
}

fn describe(cfg: &AppConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Repository: {}/{}", cfg.owner, cfg.repo),
        format!("Commit: {}", cfg.head_sha),
        format!("API URL: {}", cfg.api_base_url),
        format!("Token: {}", mask_secret(&cfg.token)),
        format!(
            "Webhook: {}",
            cfg.webhook_url
                .as_deref()
                .map(mask_url)
                .unwrap_or_else(|| "<not set>".to_string())
        ),
        format!(
            "Changelog directory: {}",
            cfg.changelog_dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_else(|| "<not set>".to_string())
        ),
        format!("Changelog filename: {}", cfg.changelog_filename),
    ];

    if cfg.ignore_patterns.is_empty() {
        lines.push("Ignore patterns: <none>".to_string());
    } else {
        lines.push("Ignore patterns:".to_string());
        lines.extend(cfg.ignore_patterns.iter().map(|p| format!("  {p}")));
    }
    lines
}

fn mask_secret(value: &str) -> String {
    match value.chars().count() {
        n if n > 6 => {
            let chars: Vec<char> = value.chars().collect();
            let prefix: String = chars[..3].iter().collect();
            let suffix: String = chars[n - 3..].iter().collect();
            format!("{prefix}***{suffix}")
        }
        0 => "<not set>".to_string(),
        _ => "***".to_string(),
    }
}

// Webhook URLs embed their credential in the path.
fn mask_url(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((base, secret)) if !secret.is_empty() => format!("{base}/{}", mask_secret(secret)),
        _ => mask_secret(url),
    }
}
