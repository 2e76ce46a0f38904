/// One segment of the audible frequency range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyBand {
    pub lower_hz: f32,
    pub upper_hz: f32,
}

impl FrequencyBand {
    pub fn width(&self) -> f32 {
        self.upper_hz - self.lower_hz
    }

    pub fn center(&self) -> f32 {
        self.lower_hz + self.width() / 2.0
    }
}

/// Segments `[1, max_range_hz]` into exponentially spaced bands.
///
/// Human hearing perceives pitch on a logarithmic scale, so exponential
/// spacing gives perceptually uniform band resolution. Bands are contiguous
/// and ascending; the last band closes at exactly `max_range_hz`.
pub fn partition(max_range_hz: f32, step: f32) -> Vec<FrequencyBand> {
    let mut bands = Vec::new();

    let mut i = step;
    while i.exp() < max_range_hz {
        bands.push(FrequencyBand {
            lower_hz: (i - step).exp(),
            upper_hz: i.exp(),
        });
        i += step;
    }

    bands.push(FrequencyBand {
        lower_hz: (i - step).exp(),
        upper_hz: max_range_hz,
    });

    bands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_RANGE_HZ, SEGMENT_STEP};

    #[test]
    fn bands_are_contiguous_and_ascending() {
        let bands = partition(MAX_RANGE_HZ, SEGMENT_STEP);

        assert!(bands.len() > 1);
        for band in &bands {
            assert!(band.lower_hz < band.upper_hz);
        }
        for pair in bands.windows(2) {
            assert!((pair[0].upper_hz - pair[1].lower_hz).abs() < 1e-3);
        }
    }

    #[test]
    fn partition_covers_the_full_range() {
        let bands = partition(MAX_RANGE_HZ, SEGMENT_STEP);

        let first = bands.first().unwrap();
        let last = bands.last().unwrap();
        assert!((first.lower_hz - 1.0).abs() < 1e-6);
        assert_eq!(last.upper_hz, MAX_RANGE_HZ);
    }

    #[test]
    fn band_count_is_deterministic() {
        let a = partition(MAX_RANGE_HZ, SEGMENT_STEP);
        let b = partition(MAX_RANGE_HZ, SEGMENT_STEP);
        assert_eq!(a.len(), b.len());

        // ln(24000) ~ 10.086, so the loop yields i = 0.25..=10.0 plus the
        // closing band.
        assert_eq!(a.len(), 41);
    }

    #[test]
    fn smaller_range_produces_fewer_bands() {
        let small = partition(1000.0, SEGMENT_STEP);
        let full = partition(MAX_RANGE_HZ, SEGMENT_STEP);
        assert!(small.len() < full.len());
        assert_eq!(small.last().unwrap().upper_hz, 1000.0);
    }

    #[test]
    fn center_and_width() {
        let band = FrequencyBand {
            lower_hz: 100.0,
            upper_hz: 200.0,
        };
        assert_eq!(band.width(), 100.0);
        assert_eq!(band.center(), 150.0);
    }
}
