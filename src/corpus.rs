//! The in-memory corpus: three ordered record sequences, one per kind.
//!
//! Built at most once per run, after the source loads settle, and read-only
//! afterward. A failed source simply contributes an empty sequence; the
//! corpus never blocks on a single source's failure.

use crate::models::{RecordKind, SearchableRecord};
use crate::normalize::NormalizedRecords;

/// Process-wide aggregate of all searchable records, partitioned by kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    projects: Vec<SearchableRecord>,
    skills: Vec<SearchableRecord>,
    technologies: Vec<SearchableRecord>,
}

impl Corpus {
    /// Pure aggregation of normalized record sets. Idempotent: the same
    /// inputs always yield an equal corpus.
    pub fn build(records: NormalizedRecords) -> Self {
        Self {
            projects: records.projects,
            skills: records.skills,
            technologies: records.technologies,
        }
    }

    /// The sequence for one kind, in insertion order.
    pub fn records(&self, kind: RecordKind) -> &[SearchableRecord] {
        match kind {
            RecordKind::Project => &self.projects,
            RecordKind::Skill => &self.skills,
            RecordKind::Technology => &self.technologies,
        }
    }

    /// All records in fixed order: projects, then skills, then technologies.
    pub fn iter_all(&self) -> impl Iterator<Item = &SearchableRecord> {
        self.projects
            .iter()
            .chain(self.skills.iter())
            .chain(self.technologies.iter())
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.skills.len() + self.technologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
