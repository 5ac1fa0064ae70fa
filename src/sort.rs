//! Ordering of scored matches.
//!
//! Two levels: score (descending), then display-name length in characters
//! (ascending). Anything still tied keeps its index order because the ranker
//! uses a stable sort.

use std::cmp::Ordering;

use crate::search::ScoredMatch;

/// Two-level comparator for ranked results.
///
/// 1. **Higher score wins.**
/// 2. **Shorter display name wins** when scores are equal.
///
/// Returns [`Ordering::Equal`] for anything else, so callers that need
/// reproducible output must sort stably.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use twinsearch::{compare_matches, Catalog, SearchIndex, ScoredMatch};
///
/// let catalog = Catalog::from_json_str(r#"[{
///     "category": "Finance",
///     "similarity_score": 0.4,
///     "side_a": {"name": "Meridian Capital", "revenue": 1.0, "employees": 12, "founding_year": 1990},
///     "side_b": {"name": "Thames Capital", "revenue": 2.0, "employees": 30, "founding_year": 1985}
/// }]"#).unwrap();
/// let index = SearchIndex::build(&catalog);
///
/// let meridian = ScoredMatch { entry: &index.entries()[0], score: 30.0 };
/// let thames = ScoredMatch { entry: &index.entries()[1], score: 30.0 };
/// assert_eq!(compare_matches(&thames, &meridian), Ordering::Less);
/// ```
pub fn compare_matches(a: &ScoredMatch<'_>, b: &ScoredMatch<'_>) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| {
        let a_len = a.entry.display_name.chars().count();
        let b_len = b.entry.display_name.chars().count();
        a_len.cmp(&b_len)
    })
}
