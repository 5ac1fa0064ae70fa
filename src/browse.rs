//! Category browsing over the catalog.
//!
//! Categories are compared by exact string equality. Only the category-name
//! filter is case-insensitive.

use std::collections::HashMap;

use crate::catalog::{Catalog, PairRecord};

/// Pairs with a similarity score above this are hidden unless the caller
/// raises the threshold.
pub const DEFAULT_MAX_SIMILARITY: f64 = 3.0;

/// A category name and the number of pairs filed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category name, exactly as stored on the pairs.
    pub name: String,
    /// Number of pairs in this category.
    pub count: usize,
}

/// Distinct categories in first-seen catalog order, with pair counts.
///
/// ```
/// use twinsearch::{categories, Catalog};
///
/// let catalog = Catalog::from_json_str(r#"[
///   {"category": "Retail", "similarity_score": 1.0,
///    "side_a": {"name": "A", "revenue": 1, "employees": 1, "founding_year": 2000},
///    "side_b": {"name": "B", "revenue": 1, "employees": 1, "founding_year": 2000}},
///   {"category": "Finance", "similarity_score": 1.0,
///    "side_a": {"name": "C", "revenue": 1, "employees": 1, "founding_year": 2000},
///    "side_b": {"name": "D", "revenue": 1, "employees": 1, "founding_year": 2000}},
///   {"category": "Retail", "similarity_score": 1.0,
///    "side_a": {"name": "E", "revenue": 1, "employees": 1, "founding_year": 2000},
///    "side_b": {"name": "F", "revenue": 1, "employees": 1, "founding_year": 2000}}
/// ]"#).unwrap();
///
/// let counts = categories(&catalog);
/// assert_eq!(counts[0].name, "Retail");
/// assert_eq!(counts[0].count, 2);
/// assert_eq!(counts[1].name, "Finance");
/// ```
pub fn categories(catalog: &Catalog) -> Vec<CategoryCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for pair in catalog.pairs() {
        let i = *positions.entry(pair.category.as_str()).or_insert_with(|| {
            counts.push(CategoryCount {
                name: pair.category.clone(),
                count: 0,
            });
            counts.len() - 1
        });
        counts[i].count += 1;
    }

    counts
}

/// Categories whose name contains `filter`, ignoring ASCII case.
///
/// Surrounding whitespace in `filter` is ignored; an empty filter keeps
/// every category.
pub fn filter_categories<'a>(all: &'a [CategoryCount], filter: &str) -> Vec<&'a CategoryCount> {
    let needle = filter.trim().to_ascii_lowercase();
    all.iter()
        .filter(|c| c.name.to_ascii_lowercase().contains(&needle))
        .collect()
}

/// Pairs in `category` whose similarity is at most `max_similarity`, most
/// similar (lowest score) first.
///
/// Each pair is returned with its catalog position. Pairs with equal scores
/// keep catalog order.
pub fn pairs_in_category<'a>(
    catalog: &'a Catalog,
    category: &str,
    max_similarity: f64,
) -> Vec<(usize, &'a PairRecord)> {
    let mut pairs: Vec<(usize, &PairRecord)> = catalog
        .pairs()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.category == category && p.similarity_score <= max_similarity)
        .collect();
    pairs.sort_by(|(_, a), (_, b)| a.similarity_score.total_cmp(&b.similarity_score));
    pairs
}
