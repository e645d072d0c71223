//! Terminal and JSON presentation of load reports, search results, and
//! portfolio sections.
//!
//! Presentation only: everything here consumes engine or loader output and
//! maps it to display form without further business logic.

use clap::ValueEnum;
use serde::Serialize;

use crate::corpus::Corpus;
use crate::loader::LoadReport;
use crate::models::{
    ExperienceEntry, Project, RankedResult, RecordKind, SkillCategory, VideoData,
};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A portfolio section renderable by `folio show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Projects,
    Skills,
    Experience,
    Videos,
}

/// Serialized view of one ranked result, the shape a downstream consumer
/// gets in `--format json`.
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub kind: RecordKind,
    pub title: &'a str,
    pub description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
}

impl<'a> From<&RankedResult<'a>> for SearchHit<'a> {
    fn from(result: &RankedResult<'a>) -> Self {
        SearchHit {
            kind: result.record.kind,
            title: &result.record.title,
            description: &result.record.description,
            category: result.record.category.as_deref(),
            level: result.record.level,
        }
    }
}

/// Print ranked results to stdout.
pub fn print_results(results: &[RankedResult<'_>], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let hits: Vec<SearchHit> = results.iter().map(SearchHit::from).collect();
            println!("{}", serde_json::to_string_pretty(&hits).unwrap_or_default());
        }
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No results.");
                return;
            }
            for result in results {
                let record = result.record;
                match record.level {
                    Some(level) => println!(
                        "{}. [{}] {} ({}%)",
                        result.rank,
                        record.kind.label(),
                        record.title,
                        level
                    ),
                    None => println!("{}. [{}] {}", result.rank, record.kind.label(), record.title),
                }
                if let Some(ref category) = record.category {
                    println!("    category: {}", category);
                }
                if !record.description.is_empty() {
                    println!("    {}", record.description);
                }
                println!();
            }
        }
    }
}

/// Print the outcome of one load pass: per-source counts, per-source error
/// lines, and corpus totals.
pub fn print_load_report(report: &LoadReport, corpus: &Corpus, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let skill_count: usize = report.skills.iter().map(|c| c.skills.len()).sum();
            let payload = serde_json::json!({
                "sources": {
                    "projects": report.projects.len(),
                    "skills": skill_count,
                    "experience": report.experience.len(),
                    "videos": report.videos.as_ref().map(|v| v.featured_videos.len()),
                },
                "failures": report
                    .failures
                    .iter()
                    .map(|f| serde_json::json!({"source": f.name, "error": f.error.to_string()}))
                    .collect::<Vec<_>>(),
                "corpus": {
                    "projects": corpus.records(RecordKind::Project).len(),
                    "skills": corpus.records(RecordKind::Skill).len(),
                    "technologies": corpus.records(RecordKind::Technology).len(),
                },
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            println!("load");
            if report.failure_for("projects").is_none() {
                println!("  projects: {} items", report.projects.len());
            }
            if report.failure_for("skills").is_none() {
                let skill_count: usize = report.skills.iter().map(|c| c.skills.len()).sum();
                println!(
                    "  skills: {} items ({} categories)",
                    skill_count,
                    report.skills.len()
                );
            }
            if report.failure_for("experience").is_none() {
                println!("  experience: {} items", report.experience.len());
            }
            if let Some(ref videos) = report.videos {
                println!("  videos: {} featured", videos.featured_videos.len());
            }
            for failure in &report.failures {
                println!("  error loading {}: {}", failure.name, failure.error);
            }
            println!(
                "  corpus: {} records ({} projects, {} skills, {} technologies)",
                corpus.len(),
                corpus.records(RecordKind::Project).len(),
                corpus.records(RecordKind::Skill).len(),
                corpus.records(RecordKind::Technology).len()
            );
            println!("ok");
        }
    }
}

pub fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects available.");
        return;
    }
    for project in projects {
        println!("--- {} ---", project.title);
        if !project.category.is_empty() {
            println!("category:     {}", project.category);
        }
        if let Some(ref status) = project.status {
            println!("status:       {}", status);
        }
        if !project.description.is_empty() {
            println!("{}", project.description);
        }
        if !project.technologies.is_empty() {
            println!("technologies: {}", project.technologies.join(", "));
        }
        if let Some(ref github) = project.github {
            println!("github:       {}", github);
        }
        if let Some(ref demo) = project.demo {
            println!("demo:         {}", demo);
        }
        if let Some(ref impact) = project.impact {
            println!("impact:       {}", impact);
        }
        println!();
    }
}

pub fn print_skills(categories: &[SkillCategory]) {
    if categories.is_empty() {
        println!("No skills available.");
        return;
    }
    for category in categories {
        println!("[{}]", category.name.to_uppercase());
        for skill in &category.skills {
            println!(
                "  {:<24} {} {:>3}%  {}",
                skill.name,
                level_bar(skill.level),
                skill.level,
                skill.description
            );
        }
        println!();
    }
}

pub fn print_experience(entries: &[ExperienceEntry]) {
    if entries.is_empty() {
        println!("No experience entries available.");
        return;
    }
    for entry in entries {
        println!("--- {} @ {} ---", entry.title, entry.company);
        if !entry.duration.is_empty() {
            println!("duration: {}", entry.duration);
        }
        if !entry.description.is_empty() {
            println!("{}", entry.description);
        }
        if !entry.achievements.is_empty() {
            println!("achievements:");
            for achievement in &entry.achievements {
                println!("  - {}", achievement);
            }
        }
        if !entry.technologies.is_empty() {
            println!("technologies: {}", entry.technologies.join(", "));
        }
        println!();
    }
}

pub fn print_videos(data: &VideoData) {
    let stats = &data.channel_stats;
    println!(
        "channel: {} subscribers, {} videos, {} views, {} watch hours",
        stats.subscribers, stats.videos, stats.views, stats.hours
    );
    println!();
    for video in &data.featured_videos {
        println!("--- {} ---", video.title);
        if !video.description.is_empty() {
            println!("{}", video.description);
        }
        println!(
            "{} | {} views | https://www.youtube.com/watch?v={}",
            video.duration, video.views, video.video_id
        );
        println!();
    }
}

/// Fixed-width proficiency bar, the terminal analog of the site's progress
/// bars.
fn level_bar(level: u8) -> String {
    const WIDTH: usize = 20;
    let filled = (usize::from(level.min(100)) * WIDTH) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
