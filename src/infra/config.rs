use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "TRIVIA_ADMIN_API_URL";
const DEFAULT_API_URL: &str = "http://localhost:4000/api/v1/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "triviagame", "trivia-admin")
        .ok_or_else(|| anyhow!("unable to resolve app directories"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.json"))
}

pub fn load_config_from(path: &Path) -> AppConfig {
    let from_file = std::fs::read_to_string(path)
        .ok()
        .and_then(|text| match serde_json::from_str::<AppConfig>(&text) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring malformed config");
                None
            }
        })
        .unwrap_or_default();

    match std::env::var(API_URL_ENV) {
        Ok(url) if !url.is_empty() => AppConfig { api_base_url: url },
        _ => from_file,
    }
}

/// Config from the platform config dir, with `TRIVIA_ADMIN_API_URL` taking
/// precedence. Falls back to defaults when nothing is resolvable.
pub fn load_config() -> AppConfig {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(err) => {
            tracing::warn!(error = %err, "config dir unavailable, using defaults");
            AppConfig::default()
        }
    }
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config dir: {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(path, text)
        .with_context(|| format!("failed to write config: {}", path.display()))
}

pub fn save_config(config: &AppConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
