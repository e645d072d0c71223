//! Fetching and decoding of individual portfolio collections.
//!
//! A source location may be a filesystem path or an `http(s)://` URL. Each
//! fetch goes through two gates: the payload must be valid JSON, and the
//! JSON must have the expected top-level shape. The two failures are kept
//! distinct in [`SourceError`] so the operator can tell "unreachable" from
//! "corrupt".

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::config::Config;
use crate::models::{ExperienceEntry, Project, SkillCategory, SkillsFile, VideoData};

/// Why a single collection failed to load.
///
/// One variant per failure class: transport, HTTP status, JSON syntax,
/// and JSON structure.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("{location} answered HTTP {status}")]
    Http { location: String, status: u16 },

    #[error("{location} is not valid JSON: {reason}")]
    Parse { location: String, reason: String },

    #[error("{location} has the wrong shape: {reason}")]
    Shape { location: String, reason: String },
}

/// True if the location should be fetched over HTTP rather than read from
/// disk.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

async fn fetch_text(location: &str, timeout_secs: u64) -> Result<String, SourceError> {
    if is_remote(location) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SourceError::Fetch {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

        let response = client
            .get(location)
            .send()
            .await
            .map_err(|e| SourceError::Fetch {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Http {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| SourceError::Fetch {
            location: location.to_string(),
            reason: e.to_string(),
        })
    } else {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| SourceError::Fetch {
                location: location.to_string(),
                reason: e.to_string(),
            })
    }
}

async fn fetch_value(location: &str, timeout_secs: u64) -> Result<Value, SourceError> {
    let text = fetch_text(location, timeout_secs).await?;
    serde_json::from_str(&text).map_err(|e| SourceError::Parse {
        location: location.to_string(),
        reason: e.to_string(),
    })
}

fn shape_error(location: &str, reason: impl Into<String>) -> SourceError {
    SourceError::Shape {
        location: location.to_string(),
        reason: reason.into(),
    }
}

/// Decode a fetched `projects` payload. Top level must be a JSON array.
fn decode_projects(location: &str, value: Value) -> Result<Vec<Project>, SourceError> {
    if !value.is_array() {
        return Err(shape_error(location, "expected a JSON array of projects"));
    }
    serde_json::from_value(value).map_err(|e| shape_error(location, e.to_string()))
}

/// Decode a fetched `skills` payload. `categories` must be present and an
/// array.
fn decode_skills(location: &str, value: Value) -> Result<Vec<SkillCategory>, SourceError> {
    match value.get("categories") {
        Some(categories) if categories.is_array() => {}
        Some(_) => return Err(shape_error(location, "skills.categories must be an array")),
        None => return Err(shape_error(location, "missing skills.categories")),
    }
    let file: SkillsFile =
        serde_json::from_value(value).map_err(|e| shape_error(location, e.to_string()))?;
    Ok(file.categories)
}

/// Decode a fetched `experience` payload. Top level must be a JSON array.
fn decode_experience(location: &str, value: Value) -> Result<Vec<ExperienceEntry>, SourceError> {
    if !value.is_array() {
        return Err(shape_error(
            location,
            "expected a JSON array of experience entries",
        ));
    }
    serde_json::from_value(value).map_err(|e| shape_error(location, e.to_string()))
}

/// Decode a fetched `videos` payload.
fn decode_videos(location: &str, value: Value) -> Result<VideoData, SourceError> {
    if !value.is_object() {
        return Err(shape_error(location, "expected a JSON object"));
    }
    serde_json::from_value(value).map_err(|e| shape_error(location, e.to_string()))
}

pub async fn fetch_projects(config: &Config) -> Result<Vec<Project>, SourceError> {
    let location = &config.sources.projects;
    let value = fetch_value(location, config.http.timeout_secs).await?;
    decode_projects(location, value)
}

pub async fn fetch_skills(config: &Config) -> Result<Vec<SkillCategory>, SourceError> {
    let location = &config.sources.skills;
    let value = fetch_value(location, config.http.timeout_secs).await?;
    decode_skills(location, value)
}

pub async fn fetch_experience(config: &Config) -> Result<Vec<ExperienceEntry>, SourceError> {
    let location = &config.sources.experience;
    let value = fetch_value(location, config.http.timeout_secs).await?;
    decode_experience(location, value)
}

pub async fn fetch_videos(config: &Config) -> Result<VideoData, SourceError> {
    let location = &config.sources.videos;
    let value = fetch_value(location, config.http.timeout_secs).await?;
    decode_videos(location, value)
}
