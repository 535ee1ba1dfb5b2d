//! 홈 화면 도구 검색 테스트.
use gradegrid::catalog::{search, Tool, CATALOG};
use gradegrid::quantity::UnitFamily;

#[test]
fn empty_query_lists_everything() {
    assert_eq!(search(CATALOG, "").len(), CATALOG.len());
    assert_eq!(search(CATALOG, "   ").len(), CATALOG.len());
}

#[test]
fn search_ignores_case() {
    let hits = search(CATALOG, "LENGTH");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Length Converter");
    assert_eq!(hits[0].tool, Tool::Convert(UnitFamily::Length));
}

#[test]
fn description_text_is_searched() {
    let hits = search(CATALOG, "kelvin");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Temperature Converter");
}

#[test]
fn matches_keep_catalog_order() {
    let titles: Vec<_> = search(CATALOG, "cgpa").iter().map(|t| t.title).collect();
    assert_eq!(
        titles,
        vec!["SGPA to CGPA", "CGPA to Percentage", "Percentage to CGPA"]
    );
}

#[test]
fn no_match_is_empty() {
    assert!(search(CATALOG, "volume").is_empty());
}
