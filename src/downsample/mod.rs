pub mod lttb;

pub use lttb::{lttb_indices, uniform_indices};

use crate::db::models::TimeSeries;

/// Reduce `data` to `target` rows while keeping every series aligned.
///
/// The first series holding at least one value drives the LTTB selection, with
/// its missing values read as zero for the area math only. When every series is
/// entirely missing the rows are sampled at a uniform stride instead. At or
/// below `target` rows the input is handed back untouched.
pub fn downsample(data: TimeSeries, target: usize) -> TimeSeries {
    let n = data.len();
    for series in &data.series {
        assert_eq!(
            series.values.len(),
            n,
            "series {} is not aligned with its timestamps",
            series.metric
        );
    }

    if n <= target {
        return data;
    }

    let indices = match data.series.iter().find(|s| s.has_values()) {
        Some(reference) => {
            let ys: Vec<f64> = reference.values.iter().map(|v| v.unwrap_or(0.0)).collect();
            lttb_indices(&data.timestamps, &ys, target)
        }
        None => uniform_indices(n, target),
    };

    data.select(&indices)
}
