//! Record normalization: raw collections in, uniform searchable records out.
//!
//! Three record sets are produced: one per project, one per skill (flattened
//! out of its owning category), and one per distinct technology name drawn
//! from the union of project tag lists and skill names.
//!
//! `search_text` is assembled and lowercased here, exactly once; the query
//! engine never recomputes it.

use std::collections::HashSet;

use crate::models::{Project, RecordKind, SearchableRecord, SkillCategory};

/// The three normalized record sets, one per [`RecordKind`].
#[derive(Debug, Clone, Default)]
pub struct NormalizedRecords {
    pub projects: Vec<SearchableRecord>,
    pub skills: Vec<SearchableRecord>,
    pub technologies: Vec<SearchableRecord>,
}

/// Normalize the raw collections. Pure: raw input is not mutated, missing
/// optional fields are treated as empty.
pub fn normalize(projects: &[Project], categories: &[SkillCategory]) -> NormalizedRecords {
    NormalizedRecords {
        projects: projects.iter().map(project_record).collect(),
        skills: skill_records(categories),
        technologies: technology_records(projects, categories),
    }
}

fn project_record(project: &Project) -> SearchableRecord {
    let mut parts: Vec<&str> = vec![&project.title, &project.description, &project.category];
    parts.extend(project.technologies.iter().map(String::as_str));

    SearchableRecord {
        kind: RecordKind::Project,
        title: project.title.clone(),
        description: project.description.clone(),
        category: non_empty(&project.category),
        level: None,
        search_text: join_lowercase(&parts),
    }
}

fn skill_records(categories: &[SkillCategory]) -> Vec<SearchableRecord> {
    categories
        .iter()
        .flat_map(|category| {
            category.skills.iter().map(|skill| SearchableRecord {
                kind: RecordKind::Skill,
                title: skill.name.clone(),
                description: skill.description.clone(),
                category: non_empty(&category.name),
                level: Some(skill.level),
                search_text: join_lowercase(&[&skill.name, &skill.description, &category.name]),
            })
        })
        .collect()
}

/// One Technology record per distinct name across project tags and skill
/// names, deduplicated case-sensitively, first occurrence wins the position.
fn technology_records(projects: &[Project], categories: &[SkillCategory]) -> Vec<SearchableRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names: Vec<&str> = Vec::new();

    let project_tags = projects.iter().flat_map(|p| p.technologies.iter());
    let skill_names = categories
        .iter()
        .flat_map(|c| c.skills.iter().map(|s| &s.name));

    for name in project_tags.chain(skill_names) {
        if seen.insert(name.as_str()) {
            names.push(name.as_str());
        }
    }

    names
        .into_iter()
        .map(|name| SearchableRecord {
            kind: RecordKind::Technology,
            title: name.to_string(),
            description: format!("Technology/Tool: {}", name),
            category: None,
            level: None,
            search_text: name.to_lowercase(),
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn join_lowercase(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
