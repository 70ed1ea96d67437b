use anyhow::{Context, Result};
use rusqlite::params;

use crate::db::{
    helpers::{unix_to_iso, value_as_f64, value_as_text},
    models::{DataRange, ModeRow, Series, TimeSeries},
    Database,
};
use crate::metrics::MetricDef;

pub const CAPTURES_TABLE: &str = "captures";

impl Database {
    /// Load the sort key and the given metric columns for every capture whose
    /// `timestamp` falls in `[start, end]`, ascending by `unix_timestamp`.
    pub async fn fetch_time_series(
        &self,
        start: &str,
        end: &str,
        metrics: &[MetricDef],
    ) -> Result<TimeSeries> {
        let start = start.to_string();
        let end = end.to_string();
        let metrics = metrics.to_vec();
        self.execute(move |conn| {
            let mut columns = vec!["unix_timestamp"];
            columns.extend(metrics.iter().map(|m| m.column));

            // Column names come from the static catalog, never from the request.
            let sql = format!(
                "SELECT {}
                 FROM {CAPTURES_TABLE}
                 WHERE timestamp >= ?1 AND timestamp <= ?2
                 ORDER BY unix_timestamp ASC",
                columns.join(", ")
            );
            let mut stmt = conn
                .prepare(&sql)
                .with_context(|| "failed to prepare capture query")?;

            let mut data = TimeSeries {
                timestamps: Vec::new(),
                series: metrics.iter().map(|m| Series::empty(m.id)).collect(),
            };

            let mut rows = stmt.query(params![start, end])?;
            while let Some(row) = rows.next()? {
                data.timestamps.push(row.get::<_, f64>(0)?);
                for (offset, series) in data.series.iter_mut().enumerate() {
                    series.values.push(value_as_f64(row.get_ref(offset + 1)?));
                }
            }

            Ok(data)
        })
        .await
    }

    /// `timestamp` and `mode` of every capture in `[start, end]`, in capture order.
    pub async fn fetch_mode_rows(&self, start: &str, end: &str) -> Result<Vec<ModeRow>> {
        let start = start.to_string();
        let end = end.to_string();
        self.execute(move |conn| {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT timestamp, mode
                     FROM {CAPTURES_TABLE}
                     WHERE timestamp >= ?1 AND timestamp <= ?2
                     ORDER BY unix_timestamp ASC"
                ))
                .with_context(|| "failed to prepare mode query")?;

            let rows_iter = stmt.query_map(params![start, end], |row| {
                Ok(ModeRow {
                    timestamp: row.get(0)?,
                    mode: value_as_text(row.get_ref(1)?),
                })
            })?;

            let mut rows = Vec::new();
            for row_result in rows_iter {
                rows.push(row_result?);
            }

            Ok(rows)
        })
        .await
    }

    pub async fn fetch_data_range(&self) -> Result<DataRange> {
        self.execute(|conn| {
            let (earliest, latest, count) = conn
                .query_row(
                    &format!(
                        "SELECT MIN(unix_timestamp), MAX(unix_timestamp), COUNT(*)
                         FROM {CAPTURES_TABLE}"
                    ),
                    [],
                    |row| {
                        Ok((
                            row.get::<_, Option<f64>>(0)?,
                            row.get::<_, Option<f64>>(1)?,
                            row.get::<_, i64>(2)?,
                        ))
                    },
                )
                .with_context(|| "failed to read capture range")?;

            Ok(DataRange {
                earliest: earliest.map(unix_to_iso).transpose()?,
                latest: latest.map(unix_to_iso).transpose()?,
                count,
            })
        })
        .await
    }
}
