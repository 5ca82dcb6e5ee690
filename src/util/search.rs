//! Company-search suggestion filtering and recent-search bookkeeping.
//!
//! DESIGN
//! ======
//! Pure functions over plain lists; the search box component owns the
//! signals and delegates every list decision here so the behavior stays
//! unit-testable without a DOM.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Maximum number of entries kept in the recent-search list.
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Companies offered when the backend list is unavailable.
pub fn fallback_company_list() -> Vec<String> {
    [
        "Samsung Electronics",
        "LG Electronics",
        "LG Chem",
        "SK Hynix",
        "SK Innovation",
        "Hyundai Motor",
        "Kia",
        "NAVER",
        "Kakao",
        "POSCO",
        "Samsung Biologics",
        "Samsung SDI",
        "Shinhan Financial Group",
        "KB Financial Group",
        "Celltrion",
        "Lotte Chemical",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

/// Filter `companies` down to suggestions for `query`.
///
/// Case-insensitive substring match; a blank query yields no suggestions so
/// the dropdown stays closed until the user types.
pub fn filter_companies(companies: &[String], query: &str) -> Vec<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    companies
        .iter()
        .filter(|company| company.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Record `company` at the front of the recent-search list.
///
/// Duplicates move to the front rather than repeating; the list is capped at
/// [`RECENT_SEARCH_LIMIT`].
pub fn push_recent(recent: &mut Vec<String>, company: &str) {
    recent.retain(|entry| entry != company);
    recent.insert(0, company.to_owned());
    recent.truncate(RECENT_SEARCH_LIMIT);
}
