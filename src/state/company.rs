//! Selected-company state shared between search and metric panels.
//!
//! DESIGN
//! ======
//! Search writes the selection, dashboard data fetching reads it. Writes are
//! one-directional (search -> store -> fetch) so suggestion UI state never
//! feeds back from the store.

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

/// Currently selected company for the dashboard, empty when none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompanyState {
    pub current: String,
}

impl CompanyState {
    /// Set the selected company. Returns `true` when the value changed;
    /// re-setting the same name is a no-op so dependent fetch effects do not
    /// re-fire.
    pub fn select(&mut self, company: &str) -> bool {
        if self.current == company {
            return false;
        }
        self.current = company.to_owned();
        true
    }

    pub fn clear(&mut self) {
        self.current.clear();
    }
}
