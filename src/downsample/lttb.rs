//! Largest-Triangle-Three-Buckets point selection.
//!
//! Both functions here return row indices rather than points, so one selection
//! can be applied to every series that shares the timestamp axis.

/// Pick `target` indices out of `xs.len()` points with LTTB.
///
/// The first and last points are always kept. The interior is split into
/// `target - 2` buckets of width `(n - 2) / (target - 2)`; from each bucket the
/// point forming the largest triangle with the previously kept point and the
/// centroid of the following bucket is kept. Equal areas keep the earliest
/// index. Returns `0..n` unchanged when `n <= target`.
pub fn lttb_indices(xs: &[f64], ys: &[f64], target: usize) -> Vec<usize> {
    assert_eq!(
        xs.len(),
        ys.len(),
        "LTTB needs one reference value per timestamp"
    );

    let n = xs.len();
    if n <= target {
        return (0..n).collect();
    }
    assert!(target >= 2, "LTTB target must keep both endpoints");

    let mut selected = Vec::with_capacity(target);
    selected.push(0);

    if target > 2 {
        let bucket_size = (n - 2) as f64 / (target - 2) as f64;
        let edge = |k: usize| (k as f64 * bucket_size) as usize + 1;

        let mut a = 0;
        for i in 0..target - 2 {
            let next_start = edge(i + 1);
            let next_end = edge(i + 2).min(n);
            let (cx, cy) = if next_start < next_end {
                let count = (next_end - next_start) as f64;
                let sum_x: f64 = xs[next_start..next_end].iter().sum();
                let sum_y: f64 = ys[next_start..next_end].iter().sum();
                (sum_x / count, sum_y / count)
            } else {
                (xs[n - 1], ys[n - 1])
            };

            let bucket_start = edge(i);
            let bucket_end = edge(i + 1).min(n - 1);
            let (ax, ay) = (xs[a], ys[a]);

            let mut max_area = -1.0;
            let mut max_idx = bucket_start;
            for j in bucket_start..bucket_end {
                let area = ((ax - cx) * (ys[j] - ay) - (ax - xs[j]) * (cy - ay)).abs();
                if area > max_area {
                    max_area = area;
                    max_idx = j;
                }
            }

            selected.push(max_idx);
            a = max_idx;
        }
    }

    selected.push(n - 1);
    selected
}

/// `target` indices evenly spread over `0..n`, endpoints included, each
/// `round(i * (n - 1) / (target - 1))`. Returns `0..n` when `n <= target`.
pub fn uniform_indices(n: usize, target: usize) -> Vec<usize> {
    if n <= target {
        return (0..n).collect();
    }
    assert!(target >= 2, "uniform sampling target must keep both endpoints");

    let step = (n - 1) as f64 / (target - 1) as f64;
    (0..target)
        .map(|i| (i as f64 * step).round() as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing(indices: &[usize]) -> bool {
        indices.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn keeps_everything_below_target() {
        let xs: Vec<f64> = (0..10).map(f64::from).collect();
        assert_eq!(lttb_indices(&xs, &xs, 20), (0..10).collect::<Vec<_>>());
        assert_eq!(lttb_indices(&xs, &xs, 10), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn selects_exact_target_with_endpoints() {
        for (n, target) in [(100, 20), (101, 3), (1000, 50), (53, 52), (7, 2), (5000, 500)] {
            let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let ys: Vec<f64> = (0..n).map(|i| ((i * 37) % 101) as f64).collect();
            let indices = lttb_indices(&xs, &ys, target);
            assert_eq!(indices.len(), target, "n={n} target={target}");
            assert_eq!(indices[0], 0);
            assert_eq!(*indices.last().unwrap(), n - 1);
            assert!(strictly_increasing(&indices), "n={n} target={target}");
        }
    }

    #[test]
    fn picks_the_spike() {
        let xs: Vec<f64> = (0..11).map(f64::from).collect();
        let mut ys = vec![0.0; 11];
        ys[4] = 50.0;
        // Buckets of width 3: [1,4), [4,7), [7,10).
        let indices = lttb_indices(&xs, &ys, 5);
        assert_eq!(indices.len(), 5);
        assert!(indices.contains(&4));
    }

    #[test]
    fn flat_series_keeps_first_index_of_each_bucket() {
        let xs: Vec<f64> = (0..11).map(f64::from).collect();
        let ys = vec![3.0; 11];
        // Every triangle is degenerate, so the strict comparison keeps the
        // earliest candidate of each bucket.
        assert_eq!(lttb_indices(&xs, &ys, 5), vec![0, 1, 4, 7, 10]);
    }

    #[test]
    fn matches_hand_computed_selection() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [0.0, 5.0, 1.0, 1.0, 6.0, 0.0];
        // Buckets of width 2: [1,3) and [3,5).
        // Bucket 0: a=(0,0), centroid of [3,5) = (3.5, 3.5).
        //   j=1: |(-3.5)(5) - (-1)(3.5)| = 14, j=2: |(-3.5)(1) - (-2)(3.5)| = 3.5
        // Bucket 1: a=(1,5), next range [5,6) holds only the last point, c=(5,0).
        //   j=3: |(-4)(-4) - (-2)(-5)| = 6, j=4: |(-4)(1) - (-3)(-5)| = 19
        assert_eq!(lttb_indices(&xs, &ys, 4), vec![0, 1, 4, 5]);
    }

    #[test]
    fn uniform_spreads_evenly() {
        assert_eq!(uniform_indices(11, 6), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(uniform_indices(10, 4), vec![0, 3, 6, 9]);
        // 1.5 rounds away from zero.
        assert_eq!(uniform_indices(4, 3), vec![0, 2, 3]);
        assert_eq!(uniform_indices(3, 5), vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "one reference value per timestamp")]
    fn mismatched_lengths_are_rejected() {
        lttb_indices(&[0.0, 1.0, 2.0], &[0.0, 1.0], 2);
    }
}
