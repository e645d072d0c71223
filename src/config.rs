use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub sources: SourcesConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Locations of the four portfolio collections. Each entry may be a
/// filesystem path or an `http(s)://` URL.
#[derive(Debug, Deserialize, Clone)]
pub struct SourcesConfig {
    #[serde(default = "default_projects_source")]
    pub projects: String,
    #[serde(default = "default_skills_source")]
    pub skills: String,
    #[serde(default = "default_experience_source")]
    pub experience: String,
    #[serde(default = "default_videos_source")]
    pub videos: String,
}

fn default_projects_source() -> String {
    "./data/projects.json".to_string()
}
fn default_skills_source() -> String {
    "./data/skills.json".to_string()
}
fn default_experience_source() -> String {
    "./data/experience.json".to_string()
}
fn default_videos_source() -> String {
    "./data/youtube.json".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    /// Maximum results returned per query.
    #[serde(default = "default_final_limit")]
    pub final_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            final_limit: default_final_limit(),
        }
    }
}

fn default_final_limit() -> usize {
    12
}

#[derive(Debug, Deserialize, Clone)]
pub struct WatchConfig {
    /// Quiet interval between the last input line and engine invocation.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.retrieval.final_limit < 1 {
        anyhow::bail!("retrieval.final_limit must be >= 1");
    }

    if config.watch.debounce_ms == 0 {
        anyhow::bail!("watch.debounce_ms must be > 0");
    }

    if config.http.timeout_secs == 0 {
        anyhow::bail!("http.timeout_secs must be > 0");
    }

    for (name, location) in [
        ("projects", &config.sources.projects),
        ("skills", &config.sources.skills),
        ("experience", &config.sources.experience),
        ("videos", &config.sources.videos),
    ] {
        if location.trim().is_empty() {
            anyhow::bail!("sources.{} must not be empty", name);
        }
    }

    Ok(config)
}
