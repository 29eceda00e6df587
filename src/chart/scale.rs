/// Axis scales for the bar chart.
///
/// Two mappings cover the whole chart: a band scale spreads discrete
/// categories (months) over evenly spaced, padded pixel ranges along the
/// x axis, and a linear scale maps precipitation values onto the y axis.
/// SVG's y coordinate grows downward, so the linear scale is usually
/// built with an inverted pixel range.

/// Maps `count` discrete categories onto evenly spaced, padded bands
/// within a pixel range.
///
/// With padding `p`, the step between band starts is
/// `(r1 - r0) / (count + p)`, each band is `step * (1 - p)` wide, and the
/// whole run of bands is centered by a `step * p` offset on either side.
#[derive(Debug, Clone)]
pub struct BandScale {
    count: usize,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Build a scale for `count` categories over `range` pixels with the
    /// given padding fraction (0.0 = touching bars, 0.99 = slivers).
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        let (r0, r1) = range;
        let n = count.max(1) as f64;
        // inner and outer padding are the same fraction, bands centered
        let step = (r1 - r0) / (n + padding);
        Self {
            count,
            start: r0 + step * padding,
            step,
            bandwidth: step * (1.0 - padding),
        }
    }

    /// Left edge of band `index`, or `None` past the end of the domain.
    pub fn position(&self, index: usize) -> Option<f64> {
        if index < self.count {
            Some(self.start + self.step * index as f64)
        } else {
            None
        }
    }

    /// Horizontal center of band `index`, where its tick and label sit.
    pub fn center(&self, index: usize) -> Option<f64> {
        self.position(index).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Distance between the starts of consecutive bands.
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Maps a numeric domain linearly onto a pixel range.
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to its pixel position. Values outside the
    /// domain extrapolate; a degenerate domain collapses to the range
    /// start.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Round-valued tick marks covering the domain, roughly `count` of
    /// them, stepped by 1, 2, or 5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if hi == lo || count == 0 {
            return vec![lo];
        }

        let step = tick_step(lo, hi, count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;

        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Tick interval of 1, 2, or 5 times a power of ten giving roughly
/// `count` intervals over `[lo, hi]`.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;

    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_band_scale_geometry() {
        // 12 bands over 770px with 0.2 padding: step = 770 / 12.2
        let scale = BandScale::new(12, (0.0, 770.0), 0.2);
        let step = 770.0 / 12.2;

        assert!(close(scale.step(), step));
        assert!(close(scale.bandwidth(), step * 0.8));
        assert!(close(scale.position(0).unwrap(), step * 0.2));
        assert!(close(scale.position(11).unwrap(), step * 0.2 + step * 11.0));
        assert_eq!(scale.position(12), None);

        // last band's right edge plus the outer pad lands on the range end
        let right_edge = scale.position(11).unwrap() + scale.bandwidth();
        assert!(close(right_edge + step * 0.2, 770.0));
    }

    #[test]
    fn test_band_center_splits_the_band() {
        let scale = BandScale::new(4, (0.0, 100.0), 0.2);
        let center = scale.center(1).unwrap();
        assert!(close(
            center,
            scale.position(1).unwrap() + scale.bandwidth() / 2.0
        ));
    }

    #[test]
    fn test_zero_padding_tiles_the_range() {
        let scale = BandScale::new(10, (0.0, 100.0), 0.0);
        assert!(close(scale.bandwidth(), 10.0));
        assert!(close(scale.position(0).unwrap(), 0.0));
        assert!(close(scale.position(9).unwrap(), 90.0));
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // SVG convention: domain [0, 10] onto pixel range [400, 0]
        let scale = LinearScale::new((0.0, 10.0), (400.0, 0.0));
        assert!(close(scale.scale(0.0), 400.0));
        assert!(close(scale.scale(10.0), 0.0));
        assert!(close(scale.scale(5.0), 200.0));
    }

    #[test]
    fn test_degenerate_domain_collapses() {
        let scale = LinearScale::new((0.0, 0.0), (400.0, 0.0));
        assert!(close(scale.scale(0.0), 400.0));
    }

    #[test]
    fn test_ticks_are_round_stepped() {
        let scale = LinearScale::new((0.0, 7.3), (400.0, 0.0));
        let ticks = scale.ticks(10);

        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&7.0));
        // step of 1 over [0, 7.3]
        assert_eq!(ticks.len(), 8);
    }

    #[test]
    fn test_ticks_fractional_domain() {
        let scale = LinearScale::new((0.0, 1.0), (400.0, 0.0));
        let ticks = scale.ticks(5);
        // step of 0.2: 0.0, 0.2, 0.4, 0.6, 0.8, 1.0
        assert_eq!(ticks.len(), 6);
        assert!(close(ticks[1], 0.2));
    }
}
