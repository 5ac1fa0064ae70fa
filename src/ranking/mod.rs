//! Match tiers and scoring for a query against one index entry.
//!
//! Scoring walks four mutually exclusive tiers in priority order: exact
//! equality, prefix, substring, and finally a word-level fallback that
//! accumulates per-word points and falls back to ordered-subsequence
//! [`coverage`] for words that are not literally present. Only the first tier
//! that applies contributes to the score.

use memchr::memmem::{self, Finder};

use crate::options::{FUZZY_THRESHOLD, MIN_QUERY_CHARS, MIN_TOKEN_CHARS};

/// Points for a search key equal to the query.
pub const EXACT_SCORE: f64 = 100.0;
/// Points for a search key that starts with the query.
pub const PREFIX_SCORE: f64 = 50.0;
/// Points for a search key that contains the query elsewhere.
pub const SUBSTRING_SCORE: f64 = 30.0;
/// Points per query word found literally in the search key.
pub const WORD_SCORE: f64 = 10.0;
/// Extra points for a literal word at the very start of the search key.
pub const WORD_AT_START_BONUS: f64 = 5.0;
/// Multiplier applied to the coverage ratio of a fuzzily satisfied word.
pub const FUZZY_WORD_WEIGHT: f64 = 5.0;

/// Which tier produced a match, and for word-level matches the accumulated
/// score.
///
/// | Tier        | Score                                       |
/// |-------------|---------------------------------------------|
/// | `Exact`     | 100                                         |
/// | `Prefix`    | 50                                          |
/// | `Substring` | 30                                          |
/// | `Words(s)`  | `s`: sum of per-word points, always `> 0`   |
/// | `NoMatch`   | 0                                           |
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchTier {
    /// Search key equals the query.
    Exact,
    /// Search key starts with the query but is longer.
    Prefix,
    /// Search key contains the query past position 0.
    Substring,
    /// Every usable query word was found literally or fuzzily.
    Words(f64),
    /// Nothing matched.
    NoMatch,
}

impl MatchTier {
    /// Numeric score for this tier. Zero means no match.
    pub fn score(self) -> f64 {
        match self {
            MatchTier::Exact => EXACT_SCORE,
            MatchTier::Prefix => PREFIX_SCORE,
            MatchTier::Substring => SUBSTRING_SCORE,
            MatchTier::Words(s) => s,
            MatchTier::NoMatch => 0.0,
        }
    }

    /// Whether this tier represents a match.
    pub fn is_match(self) -> bool {
        self.score() > 0.0
    }
}

/// Ordered-subsequence coverage of `pattern` within `target`.
///
/// Scans `pattern` left to right, looking for each character in `target`
/// strictly after the previous match. Characters that are not found
/// contribute nothing and leave the cursor where it was. Returns the number
/// of matched characters divided by the pattern length, always in `[0, 1]`.
///
/// Returns `0.0` when `pattern` is longer than `target` (in characters) or
/// when `pattern` is empty.
///
/// # Examples
///
/// ```
/// use twinsearch::ranking::coverage;
///
/// assert_eq!(coverage("meridian capital", "meridan"), 1.0);
/// assert_eq!(coverage("abc", "abcd"), 0.0);
/// // 'x' is not found, so two of three characters match.
/// assert!((coverage("abc", "axc") - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn coverage(target: &str, pattern: &str) -> f64 {
    let pattern_len = pattern.chars().count();
    if pattern_len == 0 || pattern_len > target.chars().count() {
        return 0.0;
    }

    // Byte offset in `target` where the next search starts.
    let mut cursor = 0;
    let mut matched = 0usize;

    for c in pattern.chars() {
        if let Some(pos) = target[cursor..].find(c) {
            matched += 1;
            cursor += pos + c.len_utf8();
        }
    }

    matched as f64 / pattern_len as f64
}

/// Score the word-level fallback tier.
///
/// Words shorter than [`MIN_TOKEN_CHARS`] are skipped. A word that is neither
/// literally present nor fuzzily covered above [`FUZZY_THRESHOLD`] fails the
/// whole tier.
fn word_tier<S: AsRef<str>>(search_key: &str, words: &[S]) -> MatchTier {
    let mut all_words_match = true;
    let mut word_score = 0.0;

    for word in words {
        let word = word.as_ref();
        if word.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }

        if memmem::find(search_key.as_bytes(), word.as_bytes()).is_some() {
            word_score += WORD_SCORE;
            if search_key.starts_with(word) {
                word_score += WORD_AT_START_BONUS;
            }
        } else {
            let ratio = coverage(search_key, word);
            if ratio > FUZZY_THRESHOLD {
                word_score += ratio * FUZZY_WORD_WEIGHT;
            } else {
                all_words_match = false;
            }
        }
    }

    if all_words_match && word_score > 0.0 {
        MatchTier::Words(word_score)
    } else {
        MatchTier::NoMatch
    }
}

/// Pick the tier given where (if anywhere) the whole query occurs in the key.
fn classify_with<S: AsRef<str>>(
    search_key: &str,
    query_lower: &str,
    found_at: Option<usize>,
    words: &[S],
) -> MatchTier {
    if search_key == query_lower {
        return MatchTier::Exact;
    }
    match found_at {
        Some(0) => MatchTier::Prefix,
        Some(_) => MatchTier::Substring,
        None => word_tier(search_key, words),
    }
}

/// Determine which tier `query_lower` matches `search_key` at.
///
/// `query_lower` must already be lower-cased and `query_words` must be
/// `query_lower` split on whitespace.
///
/// # Examples
///
/// ```
/// use twinsearch::ranking::{classify, MatchTier};
///
/// assert_eq!(classify("thames capital", "thames capital", &["thames", "capital"]), MatchTier::Exact);
/// assert_eq!(classify("thames capital", "tham", &["tham"]), MatchTier::Prefix);
/// assert_eq!(classify("thames capital", "capital", &["capital"]), MatchTier::Substring);
/// assert_eq!(classify("thames capital", "zz", &["zz"]), MatchTier::NoMatch);
/// ```
pub fn classify<S: AsRef<str>>(
    search_key: &str,
    query_lower: &str,
    query_words: &[S],
) -> MatchTier {
    let found_at = memmem::find(search_key.as_bytes(), query_lower.as_bytes());
    classify_with(search_key, query_lower, found_at, query_words)
}

/// Score `query_lower` against `search_key`. Zero means no match.
///
/// Same preconditions as [`classify`].
///
/// # Examples
///
/// ```
/// use twinsearch::ranking::score;
///
/// assert_eq!(score("meridian capital", "meridian", &["meridian"]), 50.0);
/// assert_eq!(score("meridian capital", "capital", &["capital"]), 30.0);
/// // Both words are misspelled but fuzzily covered.
/// assert!(score("meridian capital", "meridan captal", &["meridan", "captal"]) > 0.0);
/// ```
pub fn score<S: AsRef<str>>(search_key: &str, query_lower: &str, query_words: &[S]) -> f64 {
    classify(search_key, query_lower, query_words).score()
}

/// A query normalized once and reused across every index entry.
///
/// Construction enforces the boundary preconditions: the raw query is
/// trimmed, must be at least [`MIN_QUERY_CHARS`] characters long, is
/// ASCII lower-cased, and is split into whitespace-separated words.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    lower: String,
    words: Vec<String>,
    finder: Finder<'static>,
}

impl PreparedQuery {
    /// Prepare `raw`, or return `None` if it is too short to search for.
    ///
    /// ```
    /// use twinsearch::ranking::PreparedQuery;
    ///
    /// let pq = PreparedQuery::new("  Meridan  CAPTAL ").unwrap();
    /// assert_eq!(pq.lower(), "meridan  captal");
    /// assert_eq!(pq.words(), ["meridan", "captal"]);
    ///
    /// assert!(PreparedQuery::new(" m ").is_none());
    /// ```
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        let lower = trimmed.to_ascii_lowercase();
        let words = lower.split_whitespace().map(str::to_owned).collect();
        let finder = Finder::new(lower.as_bytes()).into_owned();
        Some(Self {
            lower,
            words,
            finder,
        })
    }

    /// The trimmed, lower-cased query.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// The query split on whitespace runs.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Determine the match tier for `search_key`.
    pub fn classify(&self, search_key: &str) -> MatchTier {
        let found_at = self.finder.find(search_key.as_bytes());
        classify_with(search_key, &self.lower, found_at, &self.words)
    }

    /// Score `search_key`. Identical to [`score`] with this query's parts.
    pub fn score(&self, search_key: &str) -> f64 {
        self.classify(search_key).score()
    }
}
