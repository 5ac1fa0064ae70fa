//! The ranker: score every index entry, deduplicate, sort and truncate.

use std::collections::HashSet;

use crate::catalog::Side;
use crate::index::{IndexEntry, SearchIndex};
use crate::options::SearchOptions;
use crate::ranking::PreparedQuery;
use crate::sort::compare_matches;

/// One index entry that matched a query, with its score.
///
/// Borrows from the [`SearchIndex`] it was ranked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    /// The matching entry.
    pub entry: &'a IndexEntry,
    /// Match score, always `> 0`.
    pub score: f64,
}

/// Rank `index` against a raw user `query`.
///
/// Queries shorter than two characters after trimming return no results.
/// Entries whose `(display_name, side)` was already accepted earlier in index
/// order are skipped, so the first occurrence wins even if a later duplicate
/// would have scored higher. Results are sorted by [`compare_matches`] and
/// truncated to `options.limit`.
///
/// # Examples
///
/// ```
/// use twinsearch::{rank, Catalog, SearchIndex, SearchOptions};
///
/// let catalog = Catalog::from_json_str(r#"[{
///     "category": "Finance",
///     "similarity_score": 0.4,
///     "side_a": {"name": "Meridian Capital", "revenue": 1.0, "employees": 12, "founding_year": 1990},
///     "side_b": {"name": "Thames Capital", "revenue": 2.0, "employees": 30, "founding_year": 1985}
/// }]"#).unwrap();
/// let index = SearchIndex::build(&catalog);
///
/// let results = rank(&index, "capital", &SearchOptions::default());
/// let names: Vec<&str> = results.iter().map(|m| m.entry.display_name.as_str()).collect();
/// assert_eq!(names, ["Thames Capital", "Meridian Capital"]);
///
/// assert!(rank(&index, "m", &SearchOptions::default()).is_empty());
/// ```
pub fn rank<'a>(
    index: &'a SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Vec<ScoredMatch<'a>> {
    let Some(pq) = PreparedQuery::new(query) else {
        return Vec::new();
    };
    rank_prepared(index, &pq, options)
}

/// Rank `index` against an already prepared query.
pub fn rank_prepared<'a>(
    index: &'a SearchIndex,
    pq: &PreparedQuery,
    options: &SearchOptions,
) -> Vec<ScoredMatch<'a>> {
    let mut seen: HashSet<(&str, Side)> = HashSet::new();
    let mut results = Vec::new();

    for entry in index {
        let key = (entry.display_name.as_str(), entry.side);
        if seen.contains(&key) {
            continue;
        }

        let score = pq.score(&entry.search_key);
        if score > 0.0 {
            seen.insert(key);
            results.push(ScoredMatch { entry, score });
        }
    }

    let matched = results.len();
    // Stable, so entries that tie on score and length keep index order.
    results.sort_by(compare_matches);
    results.truncate(options.limit);

    tracing::trace!(
        query = pq.lower(),
        candidates = index.len(),
        matched,
        returned = results.len(),
        "ranked query"
    );

    results
}

impl SearchIndex {
    /// Shorthand for [`rank`] against this index.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<ScoredMatch<'_>> {
        rank(self, query, options)
    }
}
