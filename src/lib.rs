#![warn(missing_docs)]

//! Ranked, highlighted name search over a catalog of paired businesses.
//!
//! `twinsearch` flattens a [`Catalog`] of two-sided pairs into a
//! [`SearchIndex`], scores free-text queries against it with exact, prefix,
//! substring and word-level fuzzy tiers, and marks the matched span of each
//! result for display.
//!
//! ```
//! use twinsearch::{highlight, rank, Catalog, SearchIndex, SearchOptions};
//!
//! let catalog = Catalog::from_json_str(r#"[{
//!     "category": "Finance",
//!     "similarity_score": 0.4,
//!     "side_a": {"name": "Meridian Capital", "revenue": 1.0, "employees": 12, "founding_year": 1990},
//!     "side_b": {"name": "Thames Capital", "revenue": 2.0, "employees": 30, "founding_year": 1985}
//! }]"#).unwrap();
//! let index = SearchIndex::build(&catalog);
//!
//! let results = rank(&index, "meridian", &SearchOptions::default());
//! assert_eq!(results[0].score, 50.0);
//! assert_eq!(
//!     highlight(&results[0].entry.display_name, "meridian"),
//!     "<mark>Meridian</mark> Capital",
//! );
//! ```

/// Catalog records, loading and validation.
pub mod catalog;

/// Flat per-side search index.
pub mod index;

/// Match tiers, scoring and fuzzy coverage.
pub mod ranking;

/// Ordering of scored matches.
pub mod sort;

/// The ranker.
pub mod search;

/// Span location and HTML-safe highlighting.
pub mod highlight;

/// Tunable and fixed search parameters.
pub mod options;

/// Suggestion rows and keyboard cursor.
pub mod suggest;

/// Category listing and filtering.
pub mod browse;

/// Side-by-side pair comparison.
pub mod compare;

/// Currency and number formatting.
pub mod format;

// Re-export primary public API types and functions at the crate root.
pub use browse::{
    CategoryCount, DEFAULT_MAX_SIMILARITY, categories, filter_categories, pairs_in_category,
};
pub use catalog::{Catalog, CatalogError, PairRecord, Side, SideLabels, SideRecord};
pub use compare::{Comparison, ComparisonCard};
pub use format::{format_currency, format_number};
pub use highlight::{escape_html, highlight, highlight_span};
pub use index::{IndexEntry, SearchIndex};
pub use options::SearchOptions;
pub use ranking::{MatchTier, PreparedQuery, coverage, score};
pub use search::{ScoredMatch, rank, rank_prepared};
pub use sort::compare_matches;
pub use suggest::{Suggestion, SuggestionCursor, suggest};
