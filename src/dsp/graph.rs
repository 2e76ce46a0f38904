use crate::config::{MAX_RANGE_HZ, SEGMENT_STEP, VOLUME_HEADROOM};
use crate::dsp::bands;
use crate::dsp::filter::BandpassFilter;
use crate::dsp::gain_curve::GainCurve;
use crate::dsp::noise::PinkNoise;

struct ChannelChain {
    noise: PinkNoise,
    filters: Vec<BandpassFilter>,
}

/// The full audio-rate signal path.
///
/// Per channel: pink noise feeds every bandpass filter in parallel, each
/// filter output is scaled by its band gain, the scaled outputs are summed,
/// and the sum runs through the compensation and volume gains. The topology
/// is fixed at construction; parameter changes only rewrite gain values.
pub struct NoiseGraph {
    channels: Vec<ChannelChain>,
    band_gains: Vec<f32>,
    compensation: f32,
    volume: f32,
}

impl NoiseGraph {
    pub fn new(sample_rate: u32, channel_count: usize) -> Self {
        let bands = bands::partition(MAX_RANGE_HZ, SEGMENT_STEP);

        let channels = (0..channel_count)
            .map(|_| ChannelChain {
                noise: PinkNoise::new(),
                filters: bands
                    .iter()
                    .map(|band| {
                        let center = band.center();
                        // Q so the half-power bandwidth approximates the band
                        let q = center / band.width();
                        BandpassFilter::new(sample_rate as f32, center, q)
                    })
                    .collect(),
            })
            .collect();

        Self {
            channels,
            band_gains: vec![0.5; bands.len()],
            compensation: 1.0,
            volume: 0.0,
        }
    }

    pub fn band_count(&self) -> usize {
        self.band_gains.len()
    }

    /// Replaces the whole gain table and compensation factor at once.
    pub fn set_gain_curve(&mut self, curve: &GainCurve) {
        debug_assert_eq!(curve.band_gains.len(), self.band_gains.len());
        self.band_gains.copy_from_slice(&curve.band_gains);
        self.compensation = curve.compensation;
    }

    pub fn set_volume_percent(&mut self, percent: f32) {
        self.volume = (percent / 100.0) * VOLUME_HEADROOM;
    }

    #[inline]
    fn next_sample(&mut self, channel: usize) -> f32 {
        let chain = &mut self.channels[channel];
        let noise = chain.noise.next_sample();

        let mut sum = 0.0;
        for (filter, gain) in chain.filters.iter_mut().zip(&self.band_gains) {
            sum += filter.process(noise) * gain;
        }

        sum * self.compensation * self.volume
    }

    /// Fills one interleaved output block.
    pub fn process_block(&mut self, data: &mut [f32]) {
        let channel_count = self.channels.len();
        for frame in data.chunks_mut(channel_count) {
            for (channel, sample) in frame.iter_mut().enumerate() {
                *sample = self.next_sample(channel);
            }
        }
    }
}
