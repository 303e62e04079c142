//! Derived confidence metrics
//!
//! Pure arithmetic over the dashboard counts: the applied percentage and its
//! qualitative label. No I/O, no state; safe to call repeatedly.

use crate::models::DashboardMetrics;

/// Confidence summary shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceSummary {
    pub percent: u32,
    pub label: &'static str,
}

/// Applied percentage, rounded half-up. A total of zero is a defined edge
/// case (no items yet) and yields 0, not an error.
pub fn confidence_percentage(total: i64, applied: i64) -> u32 {
    if total <= 0 {
        return 0;
    }
    // Counts come from a remote API; clamp rather than trust them blindly.
    let applied = applied.clamp(0, total);
    ((applied as f64 / total as f64) * 100.0).round() as u32
}

/// Qualitative band for a percentage. Upper bounds are inclusive, so exactly
/// 25/50/75 stay in the lower band.
pub fn confidence_label(percent: u32) -> &'static str {
    if percent == 0 {
        "Not started"
    } else if percent <= 25 {
        "Just starting"
    } else if percent <= 50 {
        "Building"
    } else if percent <= 75 {
        "Calm & steady"
    } else if percent < 100 {
        "Strong"
    } else {
        "Fully applied"
    }
}

/// Combine the dashboard counts into a display summary
pub fn summarize(metrics: &DashboardMetrics) -> ConfidenceSummary {
    let percent = confidence_percentage(metrics.total_learning, metrics.applied_count);
    ConfidenceSummary { percent, label: confidence_label(percent) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_is_not_started() {
        assert_eq!(confidence_percentage(0, 0), 0);
        assert_eq!(confidence_label(0), "Not started");
    }

    #[test]
    fn test_fully_applied() {
        assert_eq!(confidence_percentage(10, 10), 100);
        assert_eq!(confidence_label(100), "Fully applied");
    }

    #[test]
    fn test_quarter_is_just_starting() {
        assert_eq!(confidence_percentage(4, 1), 25);
        assert_eq!(confidence_label(25), "Just starting");
    }

    #[test]
    fn test_two_thirds_is_calm_and_steady() {
        assert_eq!(confidence_percentage(3, 2), 67);
        assert_eq!(confidence_label(67), "Calm & steady");
    }

    #[test]
    fn test_seven_eighths_is_strong() {
        assert_eq!(confidence_percentage(8, 7), 88);
        assert_eq!(confidence_label(88), "Strong");
    }

    #[test]
    fn test_band_boundaries_stay_in_lower_band() {
        assert_eq!(confidence_label(25), "Just starting");
        assert_eq!(confidence_label(50), "Building");
        assert_eq!(confidence_label(75), "Calm & steady");
        // One past each boundary moves up.
        assert_eq!(confidence_label(26), "Building");
        assert_eq!(confidence_label(51), "Calm & steady");
        assert_eq!(confidence_label(76), "Strong");
        assert_eq!(confidence_label(99), "Strong");
    }

    #[test]
    fn test_rounding_half_up() {
        // 1/8 = 12.5% rounds up to 13
        assert_eq!(confidence_percentage(8, 1), 13);
        // 1/3 = 33.33% rounds down to 33
        assert_eq!(confidence_percentage(3, 1), 33);
        // 5/6 = 83.33% -> 83; 1/6 = 16.67% -> 17
        assert_eq!(confidence_percentage(6, 5), 83);
        assert_eq!(confidence_percentage(6, 1), 17);
    }

    #[test]
    fn test_out_of_range_counts_clamped() {
        assert_eq!(confidence_percentage(5, 9), 100);
        assert_eq!(confidence_percentage(5, -3), 0);
        assert_eq!(confidence_percentage(-1, 0), 0);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let metrics = DashboardMetrics {
            total_learning: 3,
            applied_count: 2,
            pending_count: 1,
        };
        let first = summarize(&metrics);
        let second = summarize(&metrics);
        assert_eq!(first, second);
        assert_eq!(first.percent, 67);
        assert_eq!(first.label, "Calm & steady");
    }
}
