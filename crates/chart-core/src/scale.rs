// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X (time) and Y (value) axes.

/// Maps a data interval onto a pixel interval. The pixel interval may be
/// inverted (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f32,
    r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 { d1 = d0 + 1.0; }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Horizontal scale from axis bounds to `[left, right]`.
    pub fn horizontal(min: f64, max: f64, left: i32, right: i32) -> Self {
        Self::new((min, max), (left as f32, right as f32))
    }

    /// Vertical scale: `min` at `bottom`, `max` at `top`.
    pub fn vertical(min: f64, max: f64, top: i32, bottom: i32) -> Self {
        Self::new((min, max), (bottom as f32, top as f32))
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.r0 + ((v - self.d0) / (self.d1 - self.d0)) as f32 * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.r1 - self.r0) as f64;
        if span == 0.0 { return self.d0; }
        self.d0 + ((px - self.r0) as f64 / span) * (self.d1 - self.d0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_is_inverted() {
        let s = LinearScale::vertical(0.0, 10.0, 20, 120);
        assert_eq!(s.to_px(0.0), 120.0);
        assert_eq!(s.to_px(10.0), 20.0);
        assert!((s.from_px(70.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_is_widened() {
        let s = LinearScale::horizontal(3.0, 3.0, 0, 100);
        assert_eq!(s.to_px(3.0), 0.0);
        assert_eq!(s.to_px(4.0), 100.0);
    }
}
