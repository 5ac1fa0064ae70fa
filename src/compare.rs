//! Side-by-side comparison of one pair.
//!
//! The side the user picked is always shown first.

use crate::catalog::{Catalog, Side};
use crate::format::{format_currency, format_number};
use crate::highlight::escape_html;

/// Display data for one business in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonCard {
    /// Side the business is on.
    pub side: Side,
    /// Human-readable side label.
    pub label: String,
    /// Escaped business name.
    pub name_html: String,
    /// Compact revenue, e.g. `$1.2M`.
    pub revenue: String,
    /// Comma-grouped head count.
    pub employees: String,
    /// Founding year.
    pub founded: String,
}

/// A pair laid out for display with the selected side first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Position of the pair in the catalog.
    pub pair_index: usize,
    /// Escaped category.
    pub category_html: String,
    /// Similarity score formatted with two decimals.
    pub similarity: String,
    /// Card for the selected side.
    pub first: ComparisonCard,
    /// Card for the opposite side.
    pub second: ComparisonCard,
}

impl Comparison {
    /// Lay out pair `pair_index` with `selected` first.
    ///
    /// Returns `None` if the catalog has no such pair.
    ///
    /// ```
    /// use twinsearch::{Catalog, Comparison, Side};
    ///
    /// let catalog = Catalog::from_json_str(r#"[{
    ///     "category": "Finance",
    ///     "similarity_score": 0.4,
    ///     "side_a": {"name": "Meridian Capital", "revenue": 2500000, "employees": 1200, "founding_year": 1990},
    ///     "side_b": {"name": "Thames Capital", "revenue": 48000, "employees": 30, "founding_year": 1985}
    /// }]"#).unwrap();
    ///
    /// let cmp = Comparison::new(&catalog, 0, Side::B).unwrap();
    /// assert_eq!(cmp.first.name_html, "Thames Capital");
    /// assert_eq!(cmp.second.revenue, "$2.5M");
    /// assert_eq!(cmp.second.employees, "1,200");
    /// assert_eq!(cmp.similarity, "0.40");
    /// ```
    pub fn new(catalog: &Catalog, pair_index: usize, selected: Side) -> Option<Self> {
        let pair = catalog.get(pair_index)?;

        let card = |side: Side| {
            let record = pair.side(side);
            ComparisonCard {
                side,
                label: catalog.labels().get(side).to_owned(),
                name_html: escape_html(&record.name).into_owned(),
                revenue: format_currency(record.revenue),
                employees: format_number(record.employees),
                founded: record.founding_year.to_string(),
            }
        };

        Some(Self {
            pair_index,
            category_html: escape_html(&pair.category).into_owned(),
            similarity: format!("{:.2}", pair.similarity_score),
            first: card(selected),
            second: card(selected.opposite()),
        })
    }
}
