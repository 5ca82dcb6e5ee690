use super::*;

#[test]
fn select_updates_current_company() {
    let mut state = CompanyState::default();
    assert!(state.select("Samsung Electronics"));
    assert_eq!(state.current, "Samsung Electronics");
}

#[test]
fn select_same_company_is_a_no_op() {
    let mut state = CompanyState::default();
    assert!(state.select("LG Chem"));
    assert!(!state.select("LG Chem"));
    assert_eq!(state.current, "LG Chem");
}

#[test]
fn select_replaces_previous_company() {
    let mut state = CompanyState::default();
    state.select("NAVER");
    assert!(state.select("Kakao"));
    assert_eq!(state.current, "Kakao");
}

#[test]
fn clear_empties_selection() {
    let mut state = CompanyState::default();
    state.select("POSCO");
    state.clear();
    assert_eq!(state, CompanyState::default());
}
