/// Named time-of-day interval `[start_hour, end_hour)`.
///
/// A range with `start_hour > end_hour` wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRange {
    pub name: &'static str,
    pub start_hour: u8,
    pub end_hour: u8,
}

impl PatternRange {
    const fn new(name: &'static str, start_hour: u8, end_hour: u8) -> Self {
        Self {
            name,
            start_hour,
            end_hour,
        }
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start_hour > self.end_hour
    }
}

/// Substring keys matched against pattern labels, in match order.
///
/// "afternoon" must precede "noon", otherwise afternoon labels would
/// resolve to the lunch window.
pub const PATTERN_RANGES: &[PatternRange] = &[
    PatternRange::new("night", 22, 7),
    PatternRange::new("morning", 7, 11),
    PatternRange::new("afternoon", 15, 18),
    PatternRange::new("noon", 11, 15),
    PatternRange::new("lunch", 11, 15),
    PatternRange::new("evening", 18, 22),
    PatternRange::new("dinner", 18, 22),
    PatternRange::new("breakfast", 7, 10),
    PatternRange::new("dawn", 3, 7),
    PatternRange::new("fasting", 5, 7),
    PatternRange::new("overnight", 22, 7),
];

/// Resolves a pattern label to its time range.
///
/// The label is lower-cased and the first key contained in it wins.
pub fn resolve_pattern(label: &str) -> Option<&'static PatternRange> {
    let label = label.to_lowercase();
    let found = PATTERN_RANGES
        .iter()
        .find(|range| label.contains(range.name));

    match found {
        Some(range) => tracing::debug!(
            label = %label,
            key = range.name,
            start = range.start_hour,
            end = range.end_hour,
            "Resolved pattern"
        ),
        None => tracing::debug!(label = %label, "No time range for pattern"),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(label: &str) -> Option<(u8, u8)> {
        resolve_pattern(label).map(|r| (r.start_hour, r.end_hour))
    }

    #[test]
    fn test_lunch_resolves_to_midday() {
        assert_eq!(hours("Post-lunch spike"), Some((11, 15)));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert_eq!(hours("DINNER"), Some((18, 22)));
        assert_eq!(hours("Elevated glucose during Evening period"), Some((18, 22)));
    }

    #[test]
    fn test_night_labels_wrap_midnight() {
        for label in ["Overnight lows", "Recurring hypoglycemia during night period"] {
            let range = resolve_pattern(label).expect("night label should resolve");
            assert_eq!((range.start_hour, range.end_hour), (22, 7));
            assert!(range.wraps_midnight());
        }
    }

    #[test]
    fn test_afternoon_is_not_shadowed_by_noon() {
        assert_eq!(hours("Afternoon highs"), Some((15, 18)));
        assert_eq!(hours("Noon"), Some((11, 15)));
    }

    #[test]
    fn test_first_declared_key_wins() {
        // Contains both "morning" and "breakfast"; "morning" is declared first.
        assert_eq!(hours("Morning breakfast spike"), Some((7, 11)));
        assert_eq!(hours("Breakfast spike"), Some((7, 10)));
    }

    #[test]
    fn test_unknown_label_resolves_to_none() {
        assert_eq!(hours("Weekly variability"), None);
        assert_eq!(hours(""), None);
    }

    #[test]
    fn test_non_wrapping_ranges() {
        for range in PATTERN_RANGES {
            let wraps = range.name.contains("night");
            assert_eq!(range.wraps_midnight(), wraps, "{}", range.name);
        }
    }
}
