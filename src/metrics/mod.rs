mod types;

pub use types::{display_name, MetricDef, MetricInfo};

macro_rules! metric {
    ($name:literal) => {
        MetricDef {
            id: $name,
            column: $name,
        }
    };
}

/// Numeric metrics that can be charted, in catalog order. The categorical
/// `mode` column is not listed here; it is served as mode zones instead.
pub const METRIC_CATALOG: &[MetricDef] = &[
    // Light
    metric!("lux"),
    metric!("sun_elevation"),
    // Brightness
    metric!("brightness_mean"),
    metric!("brightness_median"),
    metric!("brightness_std"),
    metric!("brightness_p5"),
    metric!("brightness_p25"),
    metric!("brightness_p75"),
    metric!("brightness_p95"),
    metric!("underexposed_pct"),
    metric!("overexposed_pct"),
    // Exposure
    metric!("exposure_time_us"),
    metric!("analogue_gain"),
    metric!("digital_gain"),
    // Weather
    metric!("weather_temperature"),
    metric!("weather_humidity"),
    metric!("weather_wind_speed"),
    metric!("weather_wind_gust"),
    metric!("weather_pressure"),
    metric!("weather_rain"),
    // System
    metric!("system_cpu_temp"),
    metric!("system_load_1min"),
    metric!("system_load_5min"),
    metric!("system_load_15min"),
];

pub const DEFAULT_METRICS: &[&str] = &[
    "lux",
    "brightness_mean",
    "exposure_time_us",
    "weather_temperature",
];

pub fn lookup(id: &str) -> Option<&'static MetricDef> {
    METRIC_CATALOG.iter().find(|def| def.id == id)
}

/// Resolve requested ids against the catalog. Unknown ids are dropped and
/// repeats keep their first position; `None` or an empty request selects
/// [`DEFAULT_METRICS`].
pub fn resolve(requested: Option<&[String]>) -> Vec<MetricDef> {
    let ids: Vec<&str> = match requested {
        Some(ids) if !ids.is_empty() => ids.iter().map(String::as_str).collect(),
        _ => DEFAULT_METRICS.to_vec(),
    };

    let mut resolved: Vec<MetricDef> = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(def) = lookup(id) {
            if !resolved.iter().any(|r| r.id == def.id) {
                resolved.push(*def);
            }
        }
    }
    resolved
}

pub fn available_metrics() -> Vec<MetricInfo> {
    METRIC_CATALOG.iter().map(MetricInfo::from).collect()
}
