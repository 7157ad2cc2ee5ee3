// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers: "nice" numeric steps and whole-day date ticks.

/// Step of the form {1, 2, 5} x 10^k closest to `span / target`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm < 1.5 {
        1.0
    } else if norm < 3.5 {
        2.0
    } else if norm < 7.5 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of a nice step that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Whole-day positions spread over `[min, max]` (days are integer x values).
pub fn day_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Vec::new();
    }
    let (lo, hi) = (min.ceil(), max.floor());
    if hi < lo {
        return Vec::new();
    }
    let step = ((hi - lo) / target.max(1) as f64).ceil().max(1.0);
    let mut out = Vec::new();
    let mut d = lo;
    while d <= hi {
        out.push(d);
        d += step;
    }
    out
}

/// Decimal places that distinguish neighbouring ticks `step` apart.
pub fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 5), 2.0);
        assert_eq!(nice_step(100.0, 5), 20.0);
        assert_eq!(nice_step(7.0, 5), 1.0);
        assert!((nice_step(0.3, 6) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn ticks_inside_range() {
        assert_eq!(nice_ticks(0.5, 9.7, 5), vec![2.0, 4.0, 6.0, 8.0]);
        assert!(nice_ticks(3.0, 3.0, 5).is_empty());
        assert!(nice_ticks(f64::NAN, 3.0, 5).is_empty());
    }

    #[test]
    fn day_ticks_are_whole_days() {
        let t = day_ticks(0.2, 30.0, 6);
        assert_eq!(t.first(), Some(&1.0));
        assert!(t.iter().all(|d| d.fract() == 0.0 && *d <= 30.0));
        assert!(t.len() <= 7);
        assert_eq!(day_ticks(5.0, 5.0, 4), vec![5.0]);
    }

    #[test]
    fn decimals() {
        assert_eq!(decimals_for_step(20.0), 0);
        assert_eq!(decimals_for_step(0.5), 1);
        assert_eq!(decimals_for_step(0.05), 2);
    }
}
