use crate::config::{DEFAULT_ANGLE, DEFAULT_CENTER, DEFAULT_VOLUME, MAX_RANGE_HZ, SEGMENT_STEP};
use crate::dsp::{GainCurve, bands};

/// Control-rate state shared between the UI thread and the audio callback.
///
/// The UI mutates it under the mutex; the callback copies the gain table into
/// the running graph at block boundaries whenever `generation` moved, so a
/// parameter change is always observed as one atomic update.
pub struct AudioState {
    pub angle: f32,
    pub center: f32,
    pub volume: f32,
    pub gain_curve: GainCurve,
    pub generation: u64,
    pub sample_rate: u32,
}

impl AudioState {
    pub fn band_count(&self) -> usize {
        self.gain_curve.band_gains.len()
    }

    /// Applies a shape-control change and recomputes the whole gain curve.
    pub fn set_shape(&mut self, angle: f32, center: f32) {
        if self.angle == angle && self.center == center {
            return;
        }
        self.angle = angle;
        self.center = center;
        self.gain_curve = GainCurve::compute(angle, center, self.band_count());
        self.generation += 1;
    }

    pub fn set_volume(&mut self, volume: f32) {
        if self.volume == volume {
            return;
        }
        self.volume = volume;
        self.generation += 1;
    }
}

impl Default for AudioState {
    fn default() -> Self {
        let band_count = bands::partition(MAX_RANGE_HZ, SEGMENT_STEP).len();

        Self {
            angle: DEFAULT_ANGLE,
            center: DEFAULT_CENTER,
            volume: DEFAULT_VOLUME,
            gain_curve: GainCurve::compute(DEFAULT_ANGLE, DEFAULT_CENTER, band_count),
            generation: 0,
            sample_rate: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_change_bumps_generation_and_recomputes() {
        let mut state = AudioState::default();
        let before = state.generation;

        state.set_shape(0.0, 0.5);
        assert_eq!(state.generation, before + 1);
        assert!(state.gain_curve.band_gains.iter().all(|g| (g - 0.5).abs() < 1e-6));
    }

    #[test]
    fn redundant_updates_do_not_bump_generation() {
        let mut state = AudioState::default();
        let angle = state.angle;
        let center = state.center;
        let volume = state.volume;
        let before = state.generation;

        state.set_shape(angle, center);
        state.set_volume(volume);
        assert_eq!(state.generation, before);
    }

    #[test]
    fn volume_change_bumps_generation() {
        let mut state = AudioState::default();
        let before = state.generation;
        state.set_volume(80.0);
        assert_eq!(state.generation, before + 1);
    }
}
