//! Flat search index over both sides of every catalog pair.
//!
//! [`SearchIndex::build`] walks the catalog once and emits one
//! [`IndexEntry`] per side per pair, in the order A0, B0, A1, B1, ...
//! The index is immutable after construction and is passed explicitly to the
//! ranker.

use crate::catalog::{Catalog, Side};

/// One searchable side of one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Business name as it appears in the catalog.
    pub display_name: String,
    /// ASCII lower-cased `display_name`, the string every query is scored against.
    pub search_key: String,
    /// Which side of the pair this entry came from.
    pub side: Side,
    /// Category copied from the owning pair.
    pub category: String,
    /// Position of the owning pair in the catalog.
    pub pair_index: usize,
}

/// Immutable, ordered collection of [`IndexEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build an index from `catalog`.
    ///
    /// Always produces exactly `2 * catalog.len()` entries. Rebuilding from the
    /// same catalog yields an identical index.
    ///
    /// # Examples
    ///
    /// ```
    /// use twinsearch::{Catalog, SearchIndex, Side};
    ///
    /// let catalog = Catalog::from_json_str(r#"[{
    ///     "category": "Finance",
    ///     "similarity_score": 0.4,
    ///     "side_a": {"name": "Meridian Capital", "revenue": 1.0, "employees": 12, "founding_year": 1990},
    ///     "side_b": {"name": "Thames Capital", "revenue": 2.0, "employees": 30, "founding_year": 1985}
    /// }]"#).unwrap();
    ///
    /// let index = SearchIndex::build(&catalog);
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.entries()[0].search_key, "meridian capital");
    /// assert_eq!(index.entries()[1].side, Side::B);
    /// ```
    pub fn build(catalog: &Catalog) -> Self {
        let mut entries = Vec::with_capacity(catalog.len() * 2);

        for (pair_index, pair) in catalog.pairs().iter().enumerate() {
            for side in Side::ALL {
                let display_name = pair.side(side).name.clone();
                let search_key = display_name.to_ascii_lowercase();
                entries.push(IndexEntry {
                    display_name,
                    search_key,
                    side,
                    category: pair.category.clone(),
                    pair_index,
                });
            }
        }

        tracing::debug!(
            pairs = catalog.len(),
            entries = entries.len(),
            "built search index"
        );

        Self { entries }
    }

    /// All entries in build order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Iterate entries in build order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
