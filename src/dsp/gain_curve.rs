use std::f32::consts::TAU;

/// Per-band gains plus the loudness compensation factor, recomputed as a
/// unit whenever the shape controls change.
#[derive(Debug, Clone, PartialEq)]
pub struct GainCurve {
    pub band_gains: Vec<f32>,
    pub compensation: f32,
}

fn guard(lower: f32, value: f32, upper: f32) -> f32 {
    value.max(lower).min(upper)
}

/// Converts the angle control (degrees) to the slope of the gain ramp.
pub fn angle_to_slope(angle_degrees: f32) -> f32 {
    let theta = -(angle_degrees / 360.0) * TAU;
    theta.sin() / theta.cos()
}

impl GainCurve {
    /// Computes the gain ramp for `band_count` bands.
    ///
    /// Each band's gain is a straight line through `(center, 0.5)` with
    /// steepness taken from the angle, clamped to [0, 1]. The slope is
    /// negative for positive angles, so larger angles emphasize the low
    /// bands (pink noise tilts toward brown). The compensation term offsets
    /// the loudness lost to the tilt so the overall level stays roughly
    /// constant across the control range.
    pub fn compute(angle_degrees: f32, center: f32, band_count: usize) -> Self {
        let slope = angle_to_slope(angle_degrees);

        let band_gains = (0..band_count)
            .map(|i| {
                let t = i as f32 / band_count as f32;
                guard(0.0, slope * (t - center) + 0.5, 1.0)
            })
            .collect();

        // area underneath the clamped ramp
        let b = 1.0 - center;
        let a = -slope * b;
        let compensation = a * b * 4.0 + 1.0;

        Self {
            band_gains,
            compensation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAND_COUNT: usize = 41;

    #[test]
    fn zero_angle_gives_flat_half_gain() {
        for center in [0.2, 0.5, 0.75, 1.0] {
            let curve = GainCurve::compute(0.0, center, BAND_COUNT);
            for gain in &curve.band_gains {
                assert!((gain - 0.5).abs() < 1e-6);
            }
            assert!((curve.compensation - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn gains_stay_clamped_across_control_range() {
        for angle in 0..=85 {
            for center in [0.2, 1.0] {
                let curve = GainCurve::compute(angle as f32, center, BAND_COUNT);
                for gain in &curve.band_gains {
                    assert!(*gain >= 0.0 && *gain <= 1.0);
                }
            }
        }
    }

    #[test]
    fn steep_angle_tilts_toward_low_bands() {
        let curve = GainCurve::compute(85.0, 1.0, BAND_COUNT);

        // Ramp pivots at the top of the range: low bands clamp at 1, and
        // gains never increase with band index.
        assert_eq!(curve.band_gains[0], 1.0);
        for pair in curve.band_gains.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-6);
        }
        let last = *curve.band_gains.last().unwrap();
        assert!(last > 0.5 && last < 1.0);
    }

    #[test]
    fn compensation_is_one_at_full_center() {
        for angle in [0.0, 30.0, 60.0, 85.0] {
            let curve = GainCurve::compute(angle, 1.0, BAND_COUNT);
            assert!((curve.compensation - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn compensation_is_continuous_in_center() {
        let angle = 60.0;
        let mut prev = GainCurve::compute(angle, 0.2, BAND_COUNT).compensation;

        let steps = 1000;
        for i in 1..=steps {
            let center = 0.2 + 0.8 * i as f32 / steps as f32;
            let next = GainCurve::compute(angle, center, BAND_COUNT).compensation;
            assert!((next - prev).abs() < 0.1);
            prev = next;
        }
    }

    #[test]
    fn slope_sign_matches_angle() {
        assert!(angle_to_slope(0.0).abs() < 1e-6);
        assert!(angle_to_slope(45.0) < 0.0);
        assert!((angle_to_slope(45.0) + 1.0).abs() < 1e-5);
    }
}
