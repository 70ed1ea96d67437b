pub mod capture;
pub mod chart;

pub use capture::{ModeRow, Series, TimeSeries};
pub use chart::{ChartData, DataRange, ModeZone};
