//! Financial and ESG metric panels for the company dashboard.
//!
//! DESIGN
//! ======
//! Panels render year/value tables from the dashboard payload. Chart
//! rendering proper is out of scope; the table shape keeps every series
//! visible and testable without a canvas.

#[cfg(test)]
#[path = "metric_panels_test.rs"]
mod metric_panels_test;

use leptos::prelude::*;

use crate::net::types::{DashboardData, EsgGrades, YearGrade};

/// Format a ratio value as a percentage with two decimals.
fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// Pair years with a value series, formatted for display.
///
/// Truncates to the shorter side when the backend sends mismatched lengths.
fn series_rows(years: &[String], values: &[f64]) -> Vec<(String, String)> {
    years
        .iter()
        .zip(values)
        .map(|(year, value)| (year.clone(), format_pct(*value)))
        .collect()
}

#[component]
fn SeriesTable(label: &'static str, rows: Vec<(String, String)>) -> impl IntoView {
    view! {
        <table class="metric-table">
            <caption class="metric-table__caption">{label}</caption>
            <tbody>
                {rows
                    .into_iter()
                    .map(|(year, value)| {
                        view! {
                            <tr>
                                <th scope="row">{year}</th>
                                <td>{value}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Profitability, growth, and debt/liquidity panels for one company.
#[component]
pub fn MetricPanels(data: DashboardData) -> impl IntoView {
    let fin = data.financial_metrics;
    let growth = data.growth_data;
    let debt = data.debt_liquidity_data;
    view! {
        <div class="metric-panels">
            <section class="metric-panels__group">
                <h3>"Profitability"</h3>
                <SeriesTable label="Operating margin" rows=series_rows(&fin.years, &fin.operating_margin)/>
                <SeriesTable label="Net margin" rows=series_rows(&fin.years, &fin.net_margin)/>
                <SeriesTable label="ROE" rows=series_rows(&fin.years, &fin.roe)/>
                <SeriesTable label="ROA" rows=series_rows(&fin.years, &fin.roa)/>
            </section>
            <section class="metric-panels__group">
                <h3>"Growth"</h3>
                <SeriesTable label="Revenue growth" rows=series_rows(&growth.years, &growth.revenue_growth)/>
                <SeriesTable label="Net income growth" rows=series_rows(&growth.years, &growth.net_income_growth)/>
            </section>
            <section class="metric-panels__group">
                <h3>"Debt & Liquidity"</h3>
                <SeriesTable label="Debt ratio" rows=series_rows(&debt.years, &debt.debt_ratio)/>
                <SeriesTable label="Current ratio" rows=series_rows(&debt.years, &debt.current_ratio)/>
            </section>
            {data
                .esg_grades
                .map(|grades| view! { <EsgGradeCard grades=grades/> })}
        </div>
    }
}

#[component]
fn GradeRow(pillar: &'static str, grades: Vec<YearGrade>) -> impl IntoView {
    view! {
        <tr>
            <th scope="row">{pillar}</th>
            {grades
                .into_iter()
                .map(|g| view! { <td>{format!("{} ({})", g.grade, g.year)}</td> })
                .collect::<Vec<_>>()}
        </tr>
    }
}

/// ESG letter grades per pillar across the covered years.
#[component]
pub fn EsgGradeCard(grades: EsgGrades) -> impl IntoView {
    view! {
        <section class="metric-panels__group esg-grades">
            <h3>"ESG Grades"</h3>
            <table class="metric-table">
                <tbody>
                    <GradeRow pillar="Overall" grades=grades.overall/>
                    <GradeRow pillar="Environmental" grades=grades.environmental/>
                    <GradeRow pillar="Social" grades=grades.social/>
                    <GradeRow pillar="Governance" grades=grades.governance/>
                </tbody>
            </table>
        </section>
    }
}
