//! Wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads (camelCase for dashboard
//! data) so serde stays declarative and fetch code schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::Role;

/// The user half of a session payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Claimed role; absent when the identity provider carries none.
    #[serde(default)]
    pub role: Option<Role>,
}

/// An authenticated session as returned by `/api/auth/session`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub user: SessionUser,
    /// Bearer token for subsequent API calls, when issued.
    #[serde(default)]
    pub token: Option<String>,
}

/// One graded year in an ESG series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearGrade {
    pub year: u16,
    /// Letter grade, e.g. `"A"`, `"B+"`.
    pub grade: String,
}

/// ESG letter-grade series per pillar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsgGrades {
    pub overall: Vec<YearGrade>,
    pub environmental: Vec<YearGrade>,
    pub social: Vec<YearGrade>,
    pub governance: Vec<YearGrade>,
}

/// Profitability ratios by year, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub operating_margin: Vec<f64>,
    pub net_margin: Vec<f64>,
    pub roe: Vec<f64>,
    pub roa: Vec<f64>,
    pub years: Vec<String>,
}

/// Year-over-year growth rates, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthData {
    pub revenue_growth: Vec<f64>,
    pub net_income_growth: Vec<f64>,
    pub years: Vec<String>,
}

/// Leverage and liquidity ratios by year, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtLiquidityData {
    pub debt_ratio: Vec<f64>,
    pub current_ratio: Vec<f64>,
    pub years: Vec<String>,
}

/// Full dashboard payload for one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub company_name: String,
    pub financial_metrics: FinancialMetrics,
    pub growth_data: GrowthData,
    pub debt_liquidity_data: DebtLiquidityData,
    /// Absent for companies without ESG coverage.
    #[serde(default)]
    pub esg_grades: Option<EsgGrades>,
}

/// A user row in the admin dashboard table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: String,
    pub name: String,
    pub role: Role,
}
