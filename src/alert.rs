//! Same-day report count classification.

/// Number of same-day reports for one CEP that triggers a high alert.
pub const REPORT_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    High,
    Low,
}

/// Classifies a same-day report count. The threshold is inclusive: exactly
/// five reports already raises a high alert.
pub fn classify(count: i64) -> AlertLevel {
    if count >= REPORT_THRESHOLD {
        AlertLevel::High
    } else {
        AlertLevel::Low
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_zero_reports_as_low() {
        assert_eq!(classify(0), AlertLevel::Low);
    }

    #[test]
    fn should_classify_below_threshold_as_low() {
        assert_eq!(classify(4), AlertLevel::Low);
    }

    #[test]
    fn should_classify_threshold_boundary_as_high() {
        assert_eq!(classify(5), AlertLevel::High);
    }

    #[test]
    fn should_classify_above_threshold_as_high() {
        assert_eq!(classify(17), AlertLevel::High);
    }
}
