//! Time-bucketed aggregation of daily precipitation series.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::record::DailySample;

/// Precipitation summed over one week-of-month bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySum {
    /// 1-based, anchored at the earliest sample date.
    pub week: u32,
    pub precipitation_mm: f64,
}

/// Precipitation summed over one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySum {
    /// 1-12.
    pub month: u32,
    pub precipitation_mm: f64,
}

/// Groups a single month's daily samples into week-of-month sums.
///
/// Week 1 starts at the earliest sample date; each subsequent week covers
/// the next seven days. Callers must filter samples to the target month
/// beforehand; membership is not re-checked here. An empty input yields an
/// empty result. Output is ordered by ascending week index.
pub fn aggregate_weekly(samples: &[DailySample]) -> Vec<WeeklySum> {
    let Some(first_date) = samples.iter().map(|s| s.date).min() else {
        return Vec::new();
    };

    let mut sums: BTreeMap<u32, f64> = BTreeMap::new();
    for sample in samples {
        let week = ((sample.date - first_date).num_days() / 7 + 1) as u32;
        *sums.entry(week).or_insert(0.0) += sample.precipitation_mm;
    }

    sums.into_iter()
        .map(|(week, precipitation_mm)| WeeklySum {
            week,
            precipitation_mm,
        })
        .collect()
}

/// Groups a year's daily samples into per-month sums.
///
/// A month with no samples produces no row, so callers must not assume all
/// twelve months are present. Output is ordered by ascending month.
pub fn aggregate_monthly(samples: &[DailySample]) -> Vec<MonthlySum> {
    let mut sums: BTreeMap<u32, f64> = BTreeMap::new();
    for sample in samples {
        *sums.entry(sample.date.month()).or_insert(0.0) += sample.precipitation_mm;
    }

    sums.into_iter()
        .map(|(month, precipitation_mm)| MonthlySum {
            month,
            precipitation_mm,
        })
        .collect()
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample(year: i32, month: u32, day: u32, mm: f64) -> DailySample {
        DailySample {
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            precipitation_mm: mm,
        }
    }

    #[test]
    fn should_anchor_week_one_at_first_sample_date() {
        let samples = vec![
            sample(2023, 3, 1, 10.0),
            sample(2023, 3, 8, 5.0),
            sample(2023, 3, 15, 20.0),
        ];

        let weekly = aggregate_weekly(&samples);

        assert_eq!(
            weekly,
            vec![
                WeeklySum { week: 1, precipitation_mm: 10.0 },
                WeeklySum { week: 2, precipitation_mm: 5.0 },
                WeeklySum { week: 3, precipitation_mm: 20.0 },
            ]
        );
    }

    #[test]
    fn should_sum_samples_within_the_same_week() {
        let samples = vec![
            sample(2023, 3, 1, 1.5),
            sample(2023, 3, 4, 2.5),
            sample(2023, 3, 7, 4.0),
            sample(2023, 3, 8, 8.0),
        ];

        let weekly = aggregate_weekly(&samples);

        assert_eq!(weekly.len(), 2);
        assert_eq!(weekly[0].week, 1);
        assert!((weekly[0].precipitation_mm - 8.0).abs() < 1e-9);
        assert_eq!(weekly[1].week, 2);
        assert!((weekly[1].precipitation_mm - 8.0).abs() < 1e-9);
    }

    #[test]
    fn should_yield_no_rows_for_empty_series() {
        assert!(aggregate_weekly(&[]).is_empty());
        assert!(aggregate_monthly(&[]).is_empty());
    }

    #[test]
    fn should_conserve_total_precipitation_across_weekly_buckets() {
        let samples: Vec<DailySample> = (1..=30)
            .map(|day| sample(2023, 6, day, day as f64 * 0.7))
            .collect();

        let input_total: f64 = samples.iter().map(|s| s.precipitation_mm).sum();
        let bucket_total: f64 = aggregate_weekly(&samples)
            .iter()
            .map(|w| w.precipitation_mm)
            .sum();

        assert!((input_total - bucket_total).abs() < 1e-9);
    }

    #[test]
    fn should_conserve_total_precipitation_across_monthly_buckets() {
        let mut samples = Vec::new();
        for month in 1..=12 {
            for day in [3, 14, 27] {
                samples.push(sample(2022, month, day, (month + day) as f64));
            }
        }

        let input_total: f64 = samples.iter().map(|s| s.precipitation_mm).sum();
        let monthly = aggregate_monthly(&samples);
        let bucket_total: f64 = monthly.iter().map(|m| m.precipitation_mm).sum();

        assert_eq!(monthly.len(), 12);
        assert!((input_total - bucket_total).abs() < 1e-9);
    }

    #[test]
    fn should_emit_weekly_buckets_in_ascending_order() {
        let samples = vec![
            sample(2023, 3, 29, 1.0),
            sample(2023, 3, 2, 2.0),
            sample(2023, 3, 16, 3.0),
        ];

        let weeks: Vec<u32> = aggregate_weekly(&samples).iter().map(|w| w.week).collect();

        assert_eq!(weeks, vec![1, 3, 5]);
    }

    #[test]
    fn should_omit_months_with_no_samples() {
        let samples = vec![sample(2022, 2, 10, 4.0), sample(2022, 11, 5, 6.0)];

        let monthly = aggregate_monthly(&samples);

        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly[0].month, 2);
        assert_eq!(monthly[1].month, 11);
    }
}
