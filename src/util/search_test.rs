use super::*;

fn companies(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

// =============================================================
// filter_companies
// =============================================================

#[test]
fn blank_query_yields_no_suggestions() {
    let list = companies(&["Samsung Electronics", "LG Chem"]);
    assert!(filter_companies(&list, "").is_empty());
    assert!(filter_companies(&list, "   ").is_empty());
}

#[test]
fn filter_matches_case_insensitive_substrings() {
    let list = companies(&["Samsung Electronics", "Samsung SDI", "LG Chem"]);
    assert_eq!(
        filter_companies(&list, "samsung"),
        companies(&["Samsung Electronics", "Samsung SDI"])
    );
    assert_eq!(filter_companies(&list, "CHEM"), companies(&["LG Chem"]));
}

#[test]
fn filter_trims_query_whitespace() {
    let list = companies(&["NAVER", "Kakao"]);
    assert_eq!(filter_companies(&list, "  naver "), companies(&["NAVER"]));
}

#[test]
fn filter_returns_empty_for_no_match() {
    let list = companies(&["POSCO"]);
    assert!(filter_companies(&list, "tesla").is_empty());
}

// =============================================================
// push_recent
// =============================================================

#[test]
fn push_recent_inserts_at_front() {
    let mut recent = companies(&["LG Chem"]);
    push_recent(&mut recent, "NAVER");
    assert_eq!(recent, companies(&["NAVER", "LG Chem"]));
}

#[test]
fn push_recent_moves_duplicates_to_front() {
    let mut recent = companies(&["NAVER", "LG Chem", "Kakao"]);
    push_recent(&mut recent, "Kakao");
    assert_eq!(recent, companies(&["Kakao", "NAVER", "LG Chem"]));
}

#[test]
fn push_recent_caps_the_list() {
    let mut recent = companies(&["a", "b", "c", "d", "e"]);
    push_recent(&mut recent, "f");
    assert_eq!(recent.len(), RECENT_SEARCH_LIMIT);
    assert_eq!(recent[0], "f");
    assert!(!recent.contains(&"e".to_owned()));
}
