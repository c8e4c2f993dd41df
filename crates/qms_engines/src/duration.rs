#![forbid(unsafe_code)]

/// Label for zero, negative or non-numeric input. Positive input under one
/// second stays in seconds granularity and renders as "0 sn".
pub const ZERO_DURATION_LABEL: &str = "0 dk";

const MS_PER_SECOND: f64 = 1_000.0;
const SECONDS_PER_MINUTE: u64 = 60;
const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

/// Elapsed time split into the units the compact label uses. Values are
/// floored, so a larger input never yields a smaller breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DurationParts {
    Seconds(u64),
    Composite { days: u64, hours: u64, minutes: u64 },
}

impl DurationParts {
    /// `None` for negative, zero or non-finite input.
    pub fn from_millis(millis: f64) -> Option<Self> {
        if !millis.is_finite() || millis <= 0.0 {
            return None;
        }
        let total_seconds = (millis / MS_PER_SECOND).floor() as u64;
        if total_seconds < SECONDS_PER_MINUTE {
            return Some(Self::Seconds(total_seconds));
        }
        let total_minutes = total_seconds / SECONDS_PER_MINUTE;
        Some(Self::Composite {
            days: total_minutes / MINUTES_PER_DAY,
            hours: (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR,
            minutes: total_minutes % MINUTES_PER_HOUR,
        })
    }

    pub fn total_minutes(self) -> u64 {
        match self {
            Self::Seconds(_) => 0,
            Self::Composite {
                days,
                hours,
                minutes,
            } => days * MINUTES_PER_DAY + hours * MINUTES_PER_HOUR + minutes,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Seconds(s) => format!("{s} sn"),
            Self::Composite {
                days,
                hours,
                minutes,
            } => {
                let mut parts = Vec::with_capacity(3);
                if days > 0 {
                    parts.push(format!("{days} gün"));
                }
                if hours > 0 {
                    parts.push(format!("{hours} sa"));
                }
                if minutes > 0 || (days == 0 && hours == 0) {
                    parts.push(format!("{minutes} dk"));
                }
                parts.join(" ")
            }
        }
    }
}

/// Compact Turkish label for cycle-time and time-to-close metrics.
pub fn format_duration(millis: f64) -> String {
    match DurationParts::from_millis(millis) {
        Some(parts) => parts.label(),
        None => ZERO_DURATION_LABEL.to_string(),
    }
}

/// Text input as read from stored metrics; anything non-numeric gets the
/// zero label.
pub fn format_duration_text(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(millis) => format_duration(millis),
        Err(_) => ZERO_DURATION_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn at_duration_01_invalid_input_gets_zero_label() {
        assert_eq!(format_duration(0.0), ZERO_DURATION_LABEL);
        assert_eq!(format_duration(-5_000.0), ZERO_DURATION_LABEL);
        assert_eq!(format_duration(f64::NAN), ZERO_DURATION_LABEL);
        assert_eq!(format_duration(f64::INFINITY), ZERO_DURATION_LABEL);
        assert_eq!(format_duration_text("abc"), ZERO_DURATION_LABEL);
        assert_eq!(format_duration_text(""), ZERO_DURATION_LABEL);
    }

    #[test]
    fn at_duration_02_under_a_minute_uses_seconds() {
        assert_eq!(format_duration(45_000.0), "45 sn");
        assert_eq!(format_duration(59_999.0), "59 sn");
        assert_eq!(format_duration(999.0), "0 sn");
    }

    #[test]
    fn at_duration_03_minutes_and_up_compose_units() {
        assert_eq!(format_duration(60_000.0), "1 dk");
        assert_eq!(format_duration(90_000.0), "1 dk");
        assert_eq!(format_duration(3_600_000.0), "1 sa");
        assert_eq!(format_duration(3_900_000.0), "1 sa 5 dk");
        assert_eq!(format_duration(90_000_000.0), "1 gün 1 sa");
        assert_eq!(format_duration(86_400_000.0 + 180_000.0), "1 gün 3 dk");
        assert_eq!(format_duration_text("45000"), "45 sn");
    }

    proptest! {
        #[test]
        fn prop_larger_input_never_looks_smaller(
            a in 0.0_f64..1.0e10,
            b in 0.0_f64..1.0e10,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo_parts = DurationParts::from_millis(lo);
            let hi_parts = DurationParts::from_millis(hi);
            if let (Some(l), Some(h)) = (lo_parts, hi_parts) {
                prop_assert!(l <= h);
                prop_assert!(l.total_minutes() <= h.total_minutes());
            }
            if lo_parts.is_some() {
                prop_assert!(hi_parts.is_some());
            }
        }

        #[test]
        fn prop_label_is_never_empty(ms in proptest::num::f64::ANY) {
            prop_assert!(!format_duration(ms).is_empty());
        }
    }
}
