//! Suggestion list model: ranked, highlighted rows plus keyboard-cursor state.
//!
//! This is everything a suggestion dropdown needs short of producing markup
//! for the list itself.

use crate::catalog::{Catalog, Side};
use crate::highlight::{escape_html, highlight};
use crate::index::SearchIndex;
use crate::options::SearchOptions;
use crate::search::rank;

/// One row in the suggestion list.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Escaped business name with the matched span marked.
    pub name_html: String,
    /// Escaped category.
    pub category_html: String,
    /// Side the business is on.
    pub side: Side,
    /// Human-readable label of that side.
    pub side_label: String,
    /// Pair similarity formatted with two decimals.
    pub similarity: String,
    /// Position of the owning pair in the catalog.
    pub pair_index: usize,
    /// Match score.
    pub score: f64,
}

/// Rank `query` and turn the results into display rows.
///
/// `index` must have been built from `catalog`. Entries whose pair is missing
/// from `catalog` are skipped.
pub fn suggest(
    catalog: &Catalog,
    index: &SearchIndex,
    query: &str,
    options: &SearchOptions,
) -> Vec<Suggestion> {
    let trimmed = query.trim();
    rank(index, trimmed, options)
        .into_iter()
        .filter_map(|m| {
            let pair = catalog.get(m.entry.pair_index)?;
            Some(Suggestion {
                name_html: highlight(&m.entry.display_name, trimmed),
                category_html: escape_html(&m.entry.category).into_owned(),
                side: m.entry.side,
                side_label: catalog.labels().get(m.entry.side).to_owned(),
                similarity: format!("{:.2}", pair.similarity_score),
                pair_index: m.entry.pair_index,
                score: m.score,
            })
        })
        .collect()
}

/// Keyboard navigation over a suggestion list of known length.
///
/// Starts with nothing selected. Moving down from nothing selects the first
/// row; movement is clamped to the ends of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionCursor {
    len: usize,
    selected: Option<usize>,
}

impl SuggestionCursor {
    /// Cursor over a fresh list of `len` rows.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            selected: None,
        }
    }

    /// Start over with a new list of `len` rows.
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Move down one row, stopping at the last.
    pub fn move_down(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let next = self.selected.map_or(0, |i| (i + 1).min(self.len - 1));
        self.selected = Some(next);
        self.selected
    }

    /// Move up one row, stopping at the first.
    pub fn move_up(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
        self.selected
    }

    /// The active row, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
