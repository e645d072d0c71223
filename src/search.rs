//! The query engine: candidate selection, substring matching, four-tier
//! ranking, truncation.
//!
//! # Ranking
//!
//! Matches are ranked by a four-tier comparator; each tier strictly
//! dominates the next and ties within a tier keep insertion order:
//!
//! 1. exact: lowercased title equals the query
//! 2. prefix: lowercased title starts with the query
//! 3. title substring: title contains but does not start with the query
//! 4. body: query found only in the record's search text
//!
//! The full ranking is computed before truncation, so the cap always
//! returns the best N matches, not the first N candidates encountered.
//!
//! The engine is a pure function over `(corpus, query, filter)` with no
//! state and no error path. Queries shorter than [`MIN_QUERY_LEN`] after
//! trimming yield an empty result, not a fault.

use clap::ValueEnum;
use std::str::FromStr;

use crate::corpus::Corpus;
use crate::models::{RankedResult, RecordKind, SearchableRecord};

/// Minimum trimmed query length; shorter input is keystroke noise.
pub const MIN_QUERY_LEN: usize = 2;

/// Candidate subset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchFilter {
    #[default]
    All,
    Projects,
    Skills,
    Technologies,
}

impl SearchFilter {
    fn kind(&self) -> Option<RecordKind> {
        match self {
            SearchFilter::All => None,
            SearchFilter::Projects => Some(RecordKind::Project),
            SearchFilter::Skills => Some(RecordKind::Skill),
            SearchFilter::Technologies => Some(RecordKind::Technology),
        }
    }
}

impl FromStr for SearchFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SearchFilter::All),
            "projects" => Ok(SearchFilter::Projects),
            "skills" => Ok(SearchFilter::Skills),
            "technologies" => Ok(SearchFilter::Technologies),
            other => Err(format!(
                "unknown filter: '{}'. Use all, projects, skills, or technologies.",
                other
            )),
        }
    }
}

/// Relevance class of a match, highest first. Discriminant order is the
/// sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Exact,
    Prefix,
    TitleSubstring,
    Body,
}

fn classify(record: &SearchableRecord, query: &str) -> MatchTier {
    let title = record.title.to_lowercase();
    if title == query {
        MatchTier::Exact
    } else if title.starts_with(query) {
        MatchTier::Prefix
    } else if title.contains(query) {
        MatchTier::TitleSubstring
    } else {
        MatchTier::Body
    }
}

/// Run a query against the corpus.
///
/// Pure and deterministic for a given `(corpus, query, filter)` triple;
/// cheap enough to invoke on every debounce settle. An empty or malformed
/// corpus yields empty results, never an error.
pub fn search<'a>(
    corpus: &'a Corpus,
    query: &str,
    filter: SearchFilter,
    limit: usize,
) -> Vec<RankedResult<'a>> {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let candidates: Box<dyn Iterator<Item = &'a SearchableRecord> + 'a> = match filter.kind() {
        None => Box::new(corpus.iter_all()),
        Some(kind) => Box::new(corpus.records(kind).iter()),
    };

    let mut matched: Vec<(MatchTier, &SearchableRecord)> = candidates
        .filter(|record| record.search_text.contains(&query))
        .map(|record| (classify(record, &query), record))
        .collect();

    // Stable sort: ties within a tier keep collection order.
    matched.sort_by_key(|(tier, _)| *tier);
    matched.truncate(limit);

    matched
        .into_iter()
        .enumerate()
        .map(|(index, (_, record))| RankedResult {
            rank: index + 1,
            record,
        })
        .collect()
}
