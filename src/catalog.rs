//! The catalog of paired business records.
//!
//! A [`Catalog`] is an ordered, read-only sequence of [`PairRecord`]s. A
//! pair's identity is its position in that sequence. Loading and validation
//! happen here, once; everything downstream treats the catalog as well-formed.

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which side of a pair a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first side of every pair.
    A,
    /// The second side of every pair.
    B,
}

impl Side {
    /// Both sides, in index order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Stable lower-case tag for this side.
    pub fn tag(self) -> &'static str {
        match self {
            Side::A => "a",
            Side::B => "b",
        }
    }

    /// The other side of the pair.
    pub fn opposite(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Human-readable names for the two sides of every pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideLabels {
    /// Label for [`Side::A`].
    pub a: String,
    /// Label for [`Side::B`].
    pub b: String,
}

impl Default for SideLabels {
    fn default() -> Self {
        Self {
            a: "New York City".to_owned(),
            b: "London".to_owned(),
        }
    }
}

impl SideLabels {
    /// Label for `side`.
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

/// One business on one side of a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideRecord {
    /// Display name of the business.
    pub name: String,
    /// Annual revenue in dollars.
    pub revenue: f64,
    /// Head count.
    pub employees: u64,
    /// Year the business was founded.
    pub founding_year: i32,
}

/// Two related businesses sharing a category and a similarity score.
///
/// Lower `similarity_score` means more similar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairRecord {
    /// Shared business category.
    pub category: String,
    /// Precomputed distance between the two sides. Finite and non-negative.
    pub similarity_score: f64,
    /// The [`Side::A`] business.
    pub side_a: SideRecord,
    /// The [`Side::B`] business.
    pub side_b: SideRecord,
}

impl PairRecord {
    /// The record on `side`.
    pub fn side(&self, side: Side) -> &SideRecord {
        match side {
            Side::A => &self.side_a,
            Side::B => &self.side_b,
        }
    }
}

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("pair {index}: invalid similarity score {value}")]
    InvalidSimilarity { index: usize, value: f64 },
    #[error("pair {index}: side {side} has an empty name")]
    EmptyName { index: usize, side: Side },
}

/// An ordered, validated sequence of pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pairs: Vec<PairRecord>,
    labels: SideLabels,
}

impl Catalog {
    /// Build a catalog from already-parsed pairs, validating each one.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSimilarity`] for a NaN, infinite or
    /// negative score and [`CatalogError::EmptyName`] for a blank side name.
    pub fn new(pairs: Vec<PairRecord>) -> Result<Self, CatalogError> {
        for (index, pair) in pairs.iter().enumerate() {
            validate_pair(index, pair)?;
        }
        Ok(Self {
            pairs,
            labels: SideLabels::default(),
        })
    }

    /// Parse a JSON array of pairs.
    ///
    /// ```
    /// use twinsearch::Catalog;
    ///
    /// let json = r#"[{
    ///     "category": "Finance",
    ///     "similarity_score": 0.4,
    ///     "side_a": {"name": "Meridian Capital", "revenue": 1.0, "employees": 12, "founding_year": 1990},
    ///     "side_b": {"name": "Thames Capital", "revenue": 2.0, "employees": 30, "founding_year": 1985}
    /// }]"#;
    /// let catalog = Catalog::from_json_str(json).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let pairs: Vec<PairRecord> = serde_json::from_str(json)?;
        Self::loaded(pairs)
    }

    /// Parse a JSON array of pairs from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let pairs: Vec<PairRecord> = serde_json::from_reader(reader)?;
        Self::loaded(pairs)
    }

    fn loaded(pairs: Vec<PairRecord>) -> Result<Self, CatalogError> {
        let catalog = Self::new(pairs)?;
        tracing::debug!(pairs = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Replace the human-readable side labels.
    pub fn with_labels(mut self, labels: SideLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Human-readable side labels.
    pub fn labels(&self) -> &SideLabels {
        &self.labels
    }

    /// All pairs in catalog order.
    pub fn pairs(&self) -> &[PairRecord] {
        &self.pairs
    }

    /// The pair at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&PairRecord> {
        self.pairs.get(index)
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the catalog has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn validate_pair(index: usize, pair: &PairRecord) -> Result<(), CatalogError> {
    let value = pair.similarity_score;
    if !value.is_finite() || value < 0.0 {
        return Err(CatalogError::InvalidSimilarity { index, value });
    }
    for side in Side::ALL {
        if pair.side(side).name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index, side });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn side(name: &str) -> SideRecord {
        SideRecord {
            name: name.to_owned(),
            revenue: 1_500_000.0,
            employees: 42,
            founding_year: 1999,
        }
    }

    pub(crate) fn pair(category: &str, score: f64, a: &str, b: &str) -> PairRecord {
        PairRecord {
            category: category.to_owned(),
            similarity_score: score,
            side_a: side(a),
            side_b: side(b),
        }
    }

    #[test]
    fn side_tags_and_opposites() {
        assert_eq!(Side::A.tag(), "a");
        assert_eq!(Side::B.to_string(), "b");
        assert_eq!(Side::A.opposite(), Side::B);
        assert_eq!(Side::B.opposite(), Side::A);
    }

    #[test]
    fn pair_side_accessor() {
        let p = pair("Finance", 0.5, "Meridian Capital", "Thames Capital");
        assert_eq!(p.side(Side::A).name, "Meridian Capital");
        assert_eq!(p.side(Side::B).name, "Thames Capital");
    }

    #[test]
    fn new_accepts_valid_pairs() {
        let pairs = vec![pair("Finance", 0.0, "A Co", "B Co")];
        let catalog = Catalog::new(pairs).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(0).unwrap().category, "Finance");
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn new_rejects_negative_similarity() {
        let err = Catalog::new(vec![
            pair("Finance", 0.5, "A Co", "B Co"),
            pair("Finance", -1.0, "C Co", "D Co"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSimilarity { index: 1, .. }));
    }

    #[test]
    fn new_rejects_nan_similarity() {
        let pairs = vec![pair("Finance", f64::NAN, "A Co", "B Co")];
        let err = Catalog::new(pairs).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSimilarity { index: 0, .. }));
    }

    #[test]
    fn new_rejects_blank_name() {
        let pairs = vec![pair("Finance", 1.0, "A Co", "  ")];
        let err = Catalog::new(pairs).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyName {
                index: 0,
                side: Side::B
            }
        ));
    }

    #[test]
    fn from_json_str_reads_fields() {
        let json = r#"[{
            "category": "Retail",
            "similarity_score": 1.25,
            "side_a": {"name": "Hudson Goods", "revenue": 2500000, "employees": 40, "founding_year": 2001},
            "side_b": {"name": "Camden Goods", "revenue": 900000.5, "employees": 12, "founding_year": 1978}
        }]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let p = catalog.get(0).unwrap();
        assert_eq!(p.category, "Retail");
        assert_eq!(p.side_a.employees, 40);
        assert_eq!(p.side_b.founding_year, 1978);
        assert!((p.side_b.revenue - 900000.5).abs() < f64::EPSILON);
    }

    #[test]
    fn from_reader_matches_from_str() {
        let json = br#"[{
            "category": "Retail",
            "similarity_score": 1.0,
            "side_a": {"name": "X", "revenue": 1, "employees": 1, "founding_year": 2000},
            "side_b": {"name": "Y", "revenue": 1, "employees": 1, "founding_year": 2000}
        }]"#;
        let catalog = Catalog::from_reader(&json[..]).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn from_json_str_reports_malformed_json() {
        let err = Catalog::from_json_str("[{").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
        assert!(err.to_string().starts_with("malformed catalog JSON"));
    }

    #[test]
    fn empty_json_array_is_an_empty_catalog() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn labels_default_and_override() {
        let catalog = Catalog::default();
        assert_eq!(catalog.labels().get(Side::A), "New York City");
        assert_eq!(catalog.labels().get(Side::B), "London");

        let catalog = catalog.with_labels(SideLabels {
            a: "Paris".to_owned(),
            b: "Berlin".to_owned(),
        });
        assert_eq!(catalog.labels().get(Side::B), "Berlin");
    }
}
