//! Configuration for the search engine.
//!
//! Only the result limit is adjustable at runtime. The remaining thresholds
//! are fixed constants shared by the scorer, the ranker and the highlighter.

use serde::{Deserialize, Serialize};

/// Default maximum number of results returned by a ranking call.
pub const DEFAULT_LIMIT: usize = 10;

/// Queries shorter than this many characters (after trimming) never match.
pub const MIN_QUERY_CHARS: usize = 2;

/// Query words shorter than this many characters are ignored by word-level
/// scoring and by the highlighter's word fallback.
pub const MIN_TOKEN_CHARS: usize = 2;

/// A fuzzy coverage ratio must be strictly greater than this to satisfy a word.
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Options that control a ranking call.
///
/// # Examples
///
/// ```
/// use twinsearch::SearchOptions;
///
/// let opts = SearchOptions::default();
/// assert_eq!(opts.limit, 10);
///
/// let opts = SearchOptions { limit: 3 };
/// assert_eq!(opts.limit, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of matches kept after sorting. Zero yields no results.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchOptions {
    /// Parse options from JSON. Missing fields take their default values.
    ///
    /// ```
    /// use twinsearch::SearchOptions;
    ///
    /// let opts = SearchOptions::from_json_str(r#"{"limit": 5}"#).unwrap();
    /// assert_eq!(opts.limit, 5);
    /// let opts = SearchOptions::from_json_str("{}").unwrap();
    /// assert_eq!(opts, SearchOptions::default());
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
