// File: crates/strata-core/src/downsample.rs
// Summary: LTTB (Largest-Triangle-Three-Buckets) decimation for XY series.

use crate::types::Point;

/// Downsample an ordered point sequence to at most `threshold` points,
/// preserving overall shape. The first and last input points are always
/// kept; interior picks maximize triangle area against the previously
/// selected point and the next bucket's centroid.
///
/// Precondition: input sorted by numeric x. Categorical series bypass
/// downsampling entirely. Deterministic for identical input.
pub fn lttb(points: &[Point], threshold: usize) -> Vec<Point> {
    let n = points.len();
    if threshold == 0 || n == 0 {
        return Vec::new();
    }
    if threshold >= n || n <= 2 {
        return points.to_vec();
    }
    if threshold == 1 {
        return vec![points[0].clone()];
    }

    let x_of = |p: &Point| p.x.as_number().unwrap_or(0.0);

    let bucket_size = (n - 2) as f64 / (threshold - 2) as f64;
    let mut sampled = Vec::with_capacity(threshold);
    // Always include first
    sampled.push(points[0].clone());

    let mut a = 0usize; // index of the selected point from the previous bucket

    for i in 0..(threshold - 2) {
        let start = (1.0 + (i as f64) * bucket_size).floor() as usize;
        let end = (1.0 + ((i + 1) as f64) * bucket_size).floor().min((n - 1) as f64) as usize;

        // Centroid of the next bucket
        let next_start = end;
        let next_end = (1.0 + ((i + 2) as f64) * bucket_size).floor().min(n as f64 - 1.0) as usize;
        let rs = next_start.max(1);
        let re = next_end.max(rs + 1).min(n);
        let mut avg_x = 0.0f64;
        let mut avg_y = 0.0f64;
        let mut avg_count = 0usize;
        for p in &points[rs..re] {
            avg_x += x_of(p);
            avg_y += p.y;
            avg_count += 1;
        }
        if avg_count == 0 {
            avg_x = x_of(&points[end]);
            avg_y = points[end].y;
            avg_count = 1;
        }
        avg_x /= avg_count as f64;
        avg_y /= avg_count as f64;

        // Pick the point in the current bucket forming the largest triangle
        // with the previous pick and that centroid.
        let a_x = x_of(&points[a]);
        let a_y = points[a].y;
        let mut max_area = -1.0f64;
        let mut max_idx = start;
        let se = end.max(start + 1).min(n);
        for (k, p) in points.iter().enumerate().take(se).skip(start) {
            let area =
                ((a_x - x_of(p)) * (avg_y - a_y) - (a_x - avg_x) * (p.y - a_y)).abs();
            if area > max_area {
                max_area = area;
                max_idx = k;
            }
        }
        sampled.push(points[max_idx].clone());
        a = max_idx;
    }

    // Always include last
    sampled.push(points[n - 1].clone());
    sampled
}
