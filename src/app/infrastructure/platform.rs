use std::path::PathBuf;

use tracing::{debug, info};

use super::error::{AppError, Result};

/// Per-user directory holding `config.json` (and logs in release builds).
pub fn app_config_dir() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("linguaops");
    path
}

/// Reject anything that is not an http(s) URL before handing it to the OS.
pub fn normalize_url(raw: &str) -> Result<String> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(AppError::WebsiteNotConfigured);
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url.to_string());
    }
    if url.contains("://") || url.contains(char::is_whitespace) {
        return Err(AppError::Browser(format!("unsupported URL: {url}")));
    }
    Ok(format!("https://{url}"))
}

/// Open `url` in the platform's default browser.
pub fn open_in_browser(raw: &str) -> Result<()> {
    let url = normalize_url(raw)?;
    debug!(%url, "opening browser");
    open::that(&url).map_err(|e| AppError::Browser(e.to_string()))?;
    info!(%url, "opened website");
    Ok(())
}
