//! Query strings for the period and date dropdowns.
//!
//! Values are interpolated as selected; the server validates them.

/// Target of the period dropdown.
pub fn period_query(period_days: &str) -> String {
    format!("?period_days={period_days}")
}

/// Target of the date dropdown. `date` is dropped when the page has no date
/// selector.
pub fn date_query(period_days: &str, date: Option<&str>) -> String {
    match date {
        Some(date) => format!("?period_days={period_days}&date={date}"),
        None => period_query(period_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_query() {
        assert_eq!(period_query("14"), "?period_days=14");
    }

    #[test]
    fn test_date_query() {
        assert_eq!(
            date_query("30", Some("2024-05-01")),
            "?period_days=30&date=2024-05-01"
        );
        assert_eq!(date_query("7", None), "?period_days=7");
    }
}
