//! Concurrent source loading with per-source failure isolation.
//!
//! The four fetches run as independent tasks and are joined together; each
//! failure is caught and recorded individually, so one unreachable or
//! corrupt collection never cancels a sibling. Whatever survives feeds the
//! corpus.

use crate::config::Config;
use crate::corpus::Corpus;
use crate::fetch::{self, SourceError};
use crate::models::{ExperienceEntry, Project, SkillCategory, VideoData};
use crate::normalize::normalize;

/// Names of the configured sources, in load-report order.
pub const SOURCE_NAMES: [&str; 4] = ["projects", "skills", "experience", "videos"];

/// A source that did not make it into this run's data set.
#[derive(Debug)]
pub struct SourceFailure {
    pub name: &'static str,
    pub error: SourceError,
}

/// Everything one load pass produced: the surviving collections plus the
/// failures, in source order. Constructed once and passed by reference;
/// there is no ambient mutable state behind it.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub videos: Option<VideoData>,
    pub failures: Vec<SourceFailure>,
}

impl LoadReport {
    /// True when not a single source survived.
    pub fn all_failed(&self) -> bool {
        self.failures.len() == SOURCE_NAMES.len()
    }

    pub fn failure_for(&self, name: &str) -> Option<&SourceFailure> {
        self.failures.iter().find(|f| f.name == name)
    }

    /// Build the search corpus from whatever subset of the searchable
    /// collections loaded. A failed source contributes nothing; the corpus
    /// is never blocked on it.
    pub fn build_corpus(&self) -> Corpus {
        Corpus::build(normalize(&self.projects, &self.skills))
    }
}

/// Fetch all four sources concurrently and fold the outcomes into a
/// [`LoadReport`]. Infallible by design: failures are data, not errors.
pub async fn load_all(config: &Config) -> LoadReport {
    let (projects, skills, experience, videos) = tokio::join!(
        fetch::fetch_projects(config),
        fetch::fetch_skills(config),
        fetch::fetch_experience(config),
        fetch::fetch_videos(config),
    );

    let mut report = LoadReport::default();

    match projects {
        Ok(items) => report.projects = items,
        Err(error) => report.failures.push(SourceFailure {
            name: "projects",
            error,
        }),
    }
    match skills {
        Ok(items) => report.skills = items,
        Err(error) => report.failures.push(SourceFailure {
            name: "skills",
            error,
        }),
    }
    match experience {
        Ok(items) => report.experience = items,
        Err(error) => report.failures.push(SourceFailure {
            name: "experience",
            error,
        }),
    }
    match videos {
        Ok(data) => report.videos = Some(data),
        Err(error) => report.failures.push(SourceFailure {
            name: "videos",
            error,
        }),
    }

    report
}
