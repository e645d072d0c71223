//! Core data models used throughout folio.
//!
//! These types represent the raw portfolio collections as they appear on the
//! wire and the normalized records that flow through the search engine.

use serde::{Deserialize, Serialize};

/// A project entry from the `projects` collection.
///
/// Only `title` is required on the wire; every other field defaults to
/// empty so a sparse entry never fails normalization.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

/// Top-level shape of the `skills` collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillsFile {
    pub categories: Vec<SkillCategory>,
}

/// A named group of skills (e.g. "Programming Languages").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A single skill with a proficiency percentage.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: u8,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A work history entry from the `experience` collection.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Top-level shape of the `videos` collection.
///
/// The wire format uses camelCase keys (`channelStats`, `featuredVideos`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoData {
    pub channel_stats: ChannelStats,
    #[serde(default)]
    pub featured_videos: Vec<Video>,
}

/// Aggregate channel counters. Kept as display strings ("12.4K" etc.),
/// never parsed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChannelStats {
    #[serde(default)]
    pub subscribers: String,
    #[serde(default)]
    pub videos: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub hours: String,
}

/// A featured video entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub video_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub views: String,
}

/// Provenance tag for a normalized record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Project,
    Skill,
    Technology,
}

impl RecordKind {
    /// Uppercase label used in terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Project => "PROJECT",
            RecordKind::Skill => "SKILL",
            RecordKind::Technology => "TECHNOLOGY",
        }
    }
}

/// The uniform unit indexed by the search engine.
///
/// `search_text` is built once at normalization time, already lowercased,
/// and is the only field the match predicate runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchableRecord {
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub level: Option<u8>,
    pub search_text: String,
}

/// A record paired with its rank position for one query execution.
///
/// Ordering is only meaningful within the invocation that produced it.
#[derive(Debug, Clone)]
pub struct RankedResult<'a> {
    /// 1-based position in the ranked output.
    pub rank: usize,
    pub record: &'a SearchableRecord,
}
