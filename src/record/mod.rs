pub mod flood_report;
pub mod sample;
pub mod user;

pub use flood_report::{FloodLevel, FloodReport, RainIntensity};
pub use sample::{DailySample, MonthlyAggregate, WeeklyAggregate};
pub use user::UserRecord;
