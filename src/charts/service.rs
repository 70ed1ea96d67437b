use anyhow::Result;
use chrono::{Duration, Local};
use log::{debug, warn};

use crate::{
    charts::ChartError,
    db::{
        helpers::{format_iso, now_iso, parse_iso, unix_to_iso},
        models::{ChartData, DataRange, ModeZone},
        Database,
    },
    downsample::downsample,
    metrics,
    segmentation::group_modes,
};

pub const DEFAULT_DOWNSAMPLE: usize = 500;
pub const MIN_DOWNSAMPLE: usize = 50;
pub const MAX_DOWNSAMPLE: usize = 2000;
pub const DEFAULT_RANGE_HOURS: i64 = 24;

/// Parse the `downsample` request parameter. Missing or non-integer input
/// yields [`DEFAULT_DOWNSAMPLE`]; integers are clamped to
/// `[MIN_DOWNSAMPLE, MAX_DOWNSAMPLE]`.
pub fn parse_downsample(raw: Option<&str>) -> usize {
    match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
        Some(value) => value.clamp(MIN_DOWNSAMPLE as i64, MAX_DOWNSAMPLE as i64) as usize,
        None => DEFAULT_DOWNSAMPLE,
    }
}

/// Inclusive bounds on the `timestamp` column, as ISO-8601 text.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

impl TimeRange {
    /// Fill in missing bounds: `end` defaults to now and `start` to
    /// `range_hours` before `end`. Empty strings count as missing. An `end`
    /// that cannot be parsed is still used as given, with `start` anchored to
    /// now instead. A window too large to subtract falls back to
    /// [`DEFAULT_RANGE_HOURS`].
    pub fn resolve(start: Option<&str>, end: Option<&str>, range_hours: i64) -> Self {
        let given = |value: Option<&str>| value.filter(|v| !v.is_empty()).map(str::to_string);
        let end = given(end);
        let start = given(start).unwrap_or_else(|| {
            let anchor = end
                .as_deref()
                .and_then(parse_iso)
                .unwrap_or_else(|| Local::now().naive_local());
            let start = Duration::try_hours(range_hours)
                .and_then(|window| anchor.checked_sub_signed(window))
                .unwrap_or_else(|| {
                    warn!("Range of {range_hours}h is out of bounds; using {DEFAULT_RANGE_HOURS}h");
                    anchor - Duration::hours(DEFAULT_RANGE_HOURS)
                });
            format_iso(&start)
        });
        Self {
            start,
            end: end.unwrap_or_else(now_iso),
        }
    }
}

/// One chart request. `target` is clamped to
/// `[MIN_DOWNSAMPLE, MAX_DOWNSAMPLE]` when the query runs.
#[derive(Debug, Clone)]
pub struct ChartQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub metrics: Option<Vec<String>>,
    pub target: usize,
}

impl Default for ChartQuery {
    fn default() -> Self {
        Self {
            start: None,
            end: None,
            metrics: None,
            target: DEFAULT_DOWNSAMPLE,
        }
    }
}

/// Read paths over the capture database that feed the dashboard charts.
#[derive(Clone)]
pub struct ChartService {
    db: Database,
    range_hours: i64,
}

impl ChartService {
    pub fn new(db: Database, range_hours: i64) -> Self {
        Self { db, range_hours }
    }

    fn range(&self, start: Option<&str>, end: Option<&str>) -> TimeRange {
        TimeRange::resolve(start, end, self.range_hours)
    }

    pub async fn query_chart_data(&self, query: ChartQuery) -> Result<ChartData, ChartError> {
        if !self.db.is_available() {
            warn!("Capture database not found at {}", self.db.path().display());
            return Err(ChartError::StoreUnavailable);
        }

        let range = self.range(query.start.as_deref(), query.end.as_deref());
        let selected = metrics::resolve(query.metrics.as_deref());
        if selected.is_empty() {
            return Err(ChartError::NoValidMetrics);
        }

        let target = query.target.clamp(MIN_DOWNSAMPLE, MAX_DOWNSAMPLE);
        let rows = self
            .db
            .fetch_time_series(&range.start, &range.end, &selected)
            .await?;
        let original_count = rows.len();

        if rows.is_empty() {
            let ids: Vec<String> = selected.iter().map(|m| m.id.to_string()).collect();
            return Ok(ChartData::empty(&ids));
        }

        let reduced = if original_count > target {
            downsample(rows, target)
        } else {
            rows
        };

        let timestamps = reduced
            .timestamps
            .iter()
            .map(|ts| unix_to_iso(*ts))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Chart query {}..{}: {} of {} rows across {} metrics",
            range.start,
            range.end,
            timestamps.len(),
            original_count,
            reduced.series.len()
        );

        Ok(ChartData {
            point_count: timestamps.len(),
            timestamps,
            series: reduced.series,
            original_count,
        })
    }

    /// Day/night/transition zones over the range. Empty when the database is
    /// missing or nothing was captured in the range.
    pub async fn mode_zones(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<ModeZone>> {
        if !self.db.is_available() {
            warn!("Capture database not found at {}", self.db.path().display());
            return Ok(Vec::new());
        }

        let range = self.range(start, end);
        let rows = self.db.fetch_mode_rows(&range.start, &range.end).await?;
        let zones = group_modes(rows);
        debug!("Mode zones {}..{}: {} zones", range.start, range.end, zones.len());
        Ok(zones)
    }

    pub async fn data_range(&self) -> Result<DataRange> {
        if !self.db.is_available() {
            return Ok(DataRange::unavailable());
        }
        self.db.fetch_data_range().await
    }
}
