#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, Duration, Local, TimeZone};
use raspilapse_dashboard_lib::db::{helpers::format_iso, CAPTURES_TABLE};
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// One row of the capture table; unset metrics are stored as NULL.
#[derive(Debug, Clone)]
pub struct Capture {
    pub at: DateTime<Local>,
    pub mode: Option<&'static str>,
    pub lux: Option<f64>,
    pub brightness_mean: Option<f64>,
    pub exposure_time_us: Option<i64>,
    pub weather_temperature: Option<f64>,
    pub system_cpu_temp: Option<f64>,
}

impl Capture {
    pub fn at(at: DateTime<Local>) -> Self {
        Self {
            at,
            mode: None,
            lux: None,
            brightness_mean: None,
            exposure_time_us: None,
            weather_temperature: None,
            system_cpu_temp: None,
        }
    }

    pub fn iso(&self) -> String {
        format_iso(&self.at.naive_local())
    }

    pub fn unix(&self) -> f64 {
        self.at.timestamp_micros() as f64 / 1_000_000.0
    }
}

/// A scratch capture database that lives as long as the fixture.
pub struct CaptureDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl CaptureDb {
    pub fn with_captures(captures: &[Capture]) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timelapse.db");
        let conn = Connection::open(&path).unwrap();

        conn.execute_batch(&format!(
            "CREATE TABLE {CAPTURES_TABLE} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                timestamp TEXT NOT NULL,
                unix_timestamp REAL NOT NULL,
                camera_id TEXT NOT NULL,
                image_path TEXT NOT NULL,
                lux REAL,
                mode TEXT,
                brightness_mean REAL,
                exposure_time_us INTEGER,
                weather_temperature REAL,
                system_cpu_temp REAL
            );"
        ))
        .unwrap();

        for (i, capture) in captures.iter().enumerate() {
            conn.execute(
                &format!(
                    "INSERT INTO {CAPTURES_TABLE} (
                        timestamp, unix_timestamp, camera_id, image_path,
                        lux, mode, brightness_mean, exposure_time_us,
                        weather_temperature, system_cpu_temp
                    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                params![
                    capture.iso(),
                    capture.unix(),
                    "test_cam",
                    format!("/tmp/img_{i}.jpg"),
                    capture.lux,
                    capture.mode,
                    capture.brightness_mean,
                    capture.exposure_time_us,
                    capture.weather_temperature,
                    capture.system_cpu_temp,
                ],
            )
            .unwrap();
        }

        Self { _dir: dir, path }
    }

    /// A database file without the captures table.
    pub fn without_table() -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timelapse.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE unrelated (id INTEGER);")
            .unwrap();
        Self { _dir: dir, path }
    }
}

/// Mid-January noon, local time. The hundred hours before it hold no DST
/// change in any zone, so wall-clock text stays in capture order.
pub fn fixed_anchor() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .unwrap()
}

/// `count` hourly captures going back from `now`, newest first, alternating
/// day and night.
pub fn hourly_captures(now: DateTime<Local>, count: usize) -> Vec<Capture> {
    (0..count)
        .map(|i| {
            let f = i as f64;
            Capture {
                mode: Some(if i % 2 == 0 { "day" } else { "night" }),
                lux: Some(100.0 * (f + 1.0)),
                brightness_mean: Some(128.0 + f),
                exposure_time_us: Some(1000 * (i as i64 + 1)),
                weather_temperature: Some(20.0 + f * 0.1),
                system_cpu_temp: Some(45.0 + f * 0.2),
                ..Capture::at(now - Duration::hours(i as i64))
            }
        })
        .collect()
}

/// A range wide enough to include every capture from [`hourly_captures`].
pub fn wide_range(now: DateTime<Local>, count: usize) -> (String, String) {
    let start = now - Duration::hours(count as i64 + 1);
    let end = now + Duration::hours(1);
    (
        format_iso(&start.naive_local()),
        format_iso(&end.naive_local()),
    )
}
