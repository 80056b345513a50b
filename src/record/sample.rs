//! Precipitation samples and the aggregate rows derived from them.

use chrono::NaiveDate;

/// One day of precipitation for a location, as returned by the weather
/// provider after validation at the client boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySample {
    pub date: NaiveDate,
    pub precipitation_mm: f64,
}

/// Week-of-month precipitation sum, recomputed and appended on each run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyAggregate {
    pub cep: String,
    pub year: i32,
    pub month: u32,
    /// 1-based index from the first sample date, in steps of seven days.
    pub week: u32,
    pub precipitation_mm: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Month-of-year precipitation sum over a full year of daily samples.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub cep: String,
    pub year: i32,
    pub month: u32,
    pub precipitation_mm: f64,
    pub latitude: f64,
    pub longitude: f64,
}
