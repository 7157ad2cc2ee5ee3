// File: crates/chart-core/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for XY runs.

/// Reduce `points` to at most `threshold` points, keeping the first and last and,
/// from each bucket in between, the point forming the largest triangle with the
/// previously kept point and the average of the next bucket.
///
/// Expects finite input; callers split series at gaps first.
pub fn lttb(points: &[(f64, f64)], threshold: usize) -> Vec<(f64, f64)> {
    let n = points.len();
    if threshold == 0 || n == 0 { return Vec::new(); }
    if threshold >= n || n <= 2 { return points.to_vec(); }
    if threshold == 1 { return vec![points[0]]; }
    if threshold == 2 { return vec![points[0], points[n - 1]]; }

    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let bucket = |i: usize| -> usize { ((1.0 + i as f64 * every).floor() as usize).min(n - 1) };

    let mut out = Vec::with_capacity(threshold);
    out.push(points[0]);
    let mut prev = points[0];

    for i in 0..threshold - 2 {
        let (lo, hi) = (bucket(i), bucket(i + 1).max(bucket(i) + 1));
        let next = &points[hi.min(n - 1)..bucket(i + 2).max(hi + 1).min(n)];
        let (ax, ay) = centroid(next);

        let best = points[lo..hi]
            .iter()
            .copied()
            .max_by(|p, q| area(prev, *p, (ax, ay)).total_cmp(&area(prev, *q, (ax, ay))))
            .unwrap_or(points[lo]);
        out.push(best);
        prev = best;
    }

    out.push(points[n - 1]);
    out
}

fn centroid(points: &[(f64, f64)]) -> (f64, f64) {
    let k = points.len().max(1) as f64;
    let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), &(x, y)| (sx + x, sy + y));
    (sx / k, sy / k)
}

/// Twice the triangle area; only used for comparison.
fn area(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    ((a.0 - c.0) * (b.1 - a.1) - (a.0 - b.0) * (c.1 - a.1)).abs()
}
