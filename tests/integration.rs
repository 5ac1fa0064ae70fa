//! End-to-end tests for the public API: load a catalog from JSON, build the
//! index, rank queries and render the results.

use std::collections::HashSet;

use twinsearch::{
    Catalog, Comparison, SearchIndex, SearchOptions, Side, SuggestionCursor, categories,
    filter_categories, highlight, pairs_in_category, rank, suggest,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const CATALOG_JSON: &str = r#"[
  {
    "category": "Finance",
    "similarity_score": 0.42,
    "side_a": {"name": "Meridian Capital", "revenue": 125000000, "employees": 340, "founding_year": 1988},
    "side_b": {"name": "Thames Capital", "revenue": 98000000, "employees": 210, "founding_year": 1979}
  },
  {
    "category": "Retail",
    "similarity_score": 1.8,
    "side_a": {"name": "Hudson Goods & Co", "revenue": 4200000, "employees": 55, "founding_year": 2003},
    "side_b": {"name": "Camden Goods", "revenue": 3900000, "employees": 48, "founding_year": 2006}
  },
  {
    "category": "Finance",
    "similarity_score": 2.9,
    "side_a": {"name": "Capital", "revenue": 900, "employees": 10, "founding_year": 2019},
    "side_b": {"name": "Mersey Bank", "revenue": 51000, "employees": 12, "founding_year": 1999}
  },
  {
    "category": "Finance",
    "similarity_score": 0.1,
    "side_a": {"name": "Meridian Capital", "revenue": 1, "employees": 1, "founding_year": 2020},
    "side_b": {"name": "Severn Partners", "revenue": 1, "employees": 1, "founding_year": 2020}
  }
]"#;

fn catalog() -> Catalog {
    Catalog::from_json_str(CATALOG_JSON).unwrap()
}

const SINGLE_PAIR_JSON: &str = r#"[{
  "category": "Finance",
  "similarity_score": 0.5,
  "side_a": {"name": "Meridian Capital", "revenue": 1, "employees": 1, "founding_year": 2000},
  "side_b": {"name": "Thames Capital", "revenue": 1, "employees": 1, "founding_year": 2000}
}]"#;

fn single_pair() -> Catalog {
    Catalog::from_json_str(SINGLE_PAIR_JSON).unwrap()
}

fn names<'a>(results: &[twinsearch::ScoredMatch<'a>]) -> Vec<&'a str> {
    results
        .iter()
        .map(|m| m.entry.display_name.as_str())
        .collect()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn prefix_query_ranks_and_highlights() {
    let index = SearchIndex::build(&single_pair());
    let results = rank(&index, "meridian", &SearchOptions::default());
    assert_eq!(names(&results), ["Meridian Capital"]);
    assert_eq!(results[0].score, 50.0);
    assert_eq!(
        highlight(&results[0].entry.display_name, "meridian"),
        "<mark>Meridian</mark> Capital"
    );
}

#[test]
fn substring_query_breaks_ties_by_length() {
    let index = SearchIndex::build(&single_pair());
    let results = rank(&index, "capital", &SearchOptions::default());
    assert_eq!(names(&results), ["Thames Capital", "Meridian Capital"]);
    assert_eq!(results[0].score, 30.0);
    assert_eq!(results[1].score, 30.0);
}

#[test]
fn misspelled_two_word_query_matches() {
    let index = SearchIndex::build(&single_pair());
    let results = rank(&index, "meridan captal", &SearchOptions::default());
    assert_eq!(names(&results), ["Meridian Capital"]);
    assert!(results[0].score > 0.0);
}

#[test]
fn unmatched_query_is_empty_not_an_error() {
    let index = SearchIndex::build(&single_pair());
    assert!(rank(&index, "zz", &SearchOptions::default()).is_empty());
}

#[test]
fn short_queries_are_rejected() {
    let index = SearchIndex::build(&catalog());
    for q in ["", " ", "c", " c ", "\t\n"] {
        assert!(
            rank(&index, q, &SearchOptions::default()).is_empty(),
            "query {q:?} should not match"
        );
    }
}

// ---------------------------------------------------------------------------
// Properties over the fixture catalog
// ---------------------------------------------------------------------------

#[test]
fn index_has_two_entries_per_pair() {
    let catalog = catalog();
    assert_eq!(SearchIndex::build(&catalog).len(), 2 * catalog.len());
}

#[test]
fn every_display_name_matches_itself_exactly() {
    let index = SearchIndex::build(&catalog());
    for entry in &index {
        let results = rank(&index, &entry.display_name, &SearchOptions::default());
        let top = results.first().expect("a name always matches itself");
        assert_eq!(top.score, 100.0, "{}", entry.display_name);
        assert_eq!(top.entry.display_name, entry.display_name);
    }
}

#[test]
fn results_never_repeat_name_and_side() {
    let index = SearchIndex::build(&catalog());
    for q in ["capital", "meridian", "goods", "co", "ca", "meridan cap"] {
        let mut seen = HashSet::new();
        for m in rank(&index, q, &SearchOptions::default()) {
            let key = (m.entry.display_name.as_str(), m.entry.side);
            assert!(seen.insert(key), "duplicate {} for {q}", key.0);
        }
    }
}

#[test]
fn duplicate_name_keeps_first_pair_in_catalog_order() {
    let index = SearchIndex::build(&catalog());
    let results = rank(&index, "meridian capital", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].entry.pair_index, 0);
}

#[test]
fn results_are_sorted_and_limited() {
    let index = SearchIndex::build(&catalog());
    let results = rank(&index, "capital", &SearchOptions::default());
    assert_eq!(
        names(&results),
        ["Capital", "Thames Capital", "Meridian Capital"]
    );
    assert_eq!(results[0].score, 100.0);

    let limited = rank(&index, "capital", &SearchOptions { limit: 1 });
    assert_eq!(names(&limited), ["Capital"]);
}

#[test]
fn options_load_from_json() {
    let opts = SearchOptions::from_json_str(r#"{"limit": 2}"#).unwrap();
    let index = SearchIndex::build(&catalog());
    assert_eq!(rank(&index, "capital", &opts).len(), 2);
}

// ---------------------------------------------------------------------------
// Presentation models
// ---------------------------------------------------------------------------

#[test]
fn suggestions_are_highlighted_and_escaped() {
    let catalog = catalog();
    let index = SearchIndex::build(&catalog);
    let rows = suggest(&catalog, &index, "goods", &SearchOptions::default());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name_html, "Camden <mark>Goods</mark>");
    assert_eq!(rows[1].name_html, "Hudson <mark>Goods</mark> &amp; Co");
    assert_eq!(rows[0].similarity, "1.80");

    let mut cursor = SuggestionCursor::new(rows.len());
    cursor.move_down();
    cursor.move_down();
    cursor.move_down();
    assert_eq!(cursor.selected(), Some(1));
}

#[test]
fn selecting_a_suggestion_opens_its_comparison() {
    let catalog = catalog();
    let index = SearchIndex::build(&catalog);
    let rows = suggest(&catalog, &index, "thames", &SearchOptions::default());
    let row = &rows[0];

    let (pair_index, side) = (row.pair_index, row.side);
    let cmp = Comparison::new(&catalog, pair_index, side).unwrap();
    assert_eq!(cmp.first.side, Side::B);
    assert_eq!(cmp.first.name_html, "Thames Capital");
    assert_eq!(cmp.first.revenue, "$98.0M");
    assert_eq!(cmp.second.name_html, "Meridian Capital");
    assert_eq!(cmp.second.employees, "340");
}

#[test]
fn browse_categories_and_pairs() {
    let catalog = catalog();
    let counts = categories(&catalog);
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].name, "Finance");
    assert_eq!(counts[0].count, 3);

    let visible = filter_categories(&counts, "fin");
    assert_eq!(visible.len(), 1);

    let pairs = pairs_in_category(&catalog, "Finance", 1.0);
    let indices: Vec<usize> = pairs.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [3, 0]);
}

#[test]
fn invalid_catalog_is_rejected_at_load() {
    let json = r#"[{
        "category": "Finance",
        "similarity_score": -0.5,
        "side_a": {"name": "A", "revenue": 1, "employees": 1, "founding_year": 2000},
        "side_b": {"name": "B", "revenue": 1, "employees": 1, "founding_year": 2000}
    }]"#;
    let err = Catalog::from_json_str(json).unwrap_err();
    assert!(err.to_string().contains("similarity score -0.5"));
}
