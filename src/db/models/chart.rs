use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use super::Series;

/// Chart payload returned by the data endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub timestamps: Vec<String>,
    #[serde(serialize_with = "serialize_series")]
    pub series: Vec<Series>,
    pub point_count: usize,
    pub original_count: usize,
}

impl ChartData {
    pub fn empty(metrics: &[String]) -> Self {
        Self {
            timestamps: Vec::new(),
            series: metrics.iter().map(Series::empty).collect(),
            point_count: 0,
            original_count: 0,
        }
    }
}

/// Writes the series as a JSON object keyed by metric id, keeping request order.
fn serialize_series<S>(series: &[Series], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(series.len()))?;
    for s in series {
        map.serialize_entry(&s.metric, &s.values)?;
    }
    map.end()
}

/// A maximal run of consecutive captures taken in the same mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeZone {
    pub start: String,
    pub end: String,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
    pub count: i64,
}

impl DataRange {
    pub fn unavailable() -> Self {
        Self {
            earliest: None,
            latest: None,
            count: 0,
        }
    }
}
