use super::*;

#[test]
fn format_pct_keeps_two_decimals() {
    assert_eq!(format_pct(3.26), "3.26%");
    assert_eq!(format_pct(-3.5), "-3.50%");
    assert_eq!(format_pct(250.0), "250.00%");
}

#[test]
fn series_rows_pairs_years_with_formatted_values() {
    let years = vec!["2023".to_owned(), "2024".to_owned()];
    let rows = series_rows(&years, &[4.4, -3.53]);
    assert_eq!(
        rows,
        vec![
            ("2023".to_owned(), "4.40%".to_owned()),
            ("2024".to_owned(), "-3.53%".to_owned()),
        ]
    );
}

#[test]
fn series_rows_truncates_mismatched_lengths() {
    let years = vec!["2022".to_owned(), "2023".to_owned(), "2024".to_owned()];
    let rows = series_rows(&years, &[1.0]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "2022");
}

#[test]
fn series_rows_handles_empty_series() {
    assert!(series_rows(&[], &[]).is_empty());
}
