use std::sync::Arc;

use apodize::hanning_iter;
use ringbuf::HeapCons;
use ringbuf::traits::Consumer;
use rustfft::num_complex::Complex32;
use rustfft::{Fft, FftPlanner};

use crate::config::{
    FFT_SIZE, SPECTRUM_BINS, SPECTRUM_MAX_DB, SPECTRUM_MIN_DB, SPECTRUM_SMOOTHING,
};

/// Frequency-domain snapshot source for the visualizer.
///
/// Consumes the mono mix the audio callback publishes through the ring
/// buffer, runs a windowed FFT with 50% overlap, smooths the magnitudes over
/// time, and exposes them as byte values in 0..=255 mapped from the
/// [-100, -30] dB range.
pub struct SpectrumAnalyzer {
    cons: HeapCons<f32>,
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<f32>,
    filled: usize,
    scratch: Vec<Complex32>,
    smoothed: Vec<f32>,
    bins: Vec<u8>,
}

impl SpectrumAnalyzer {
    pub fn new(cons: HeapCons<f32>) -> Self {
        Self {
            cons,
            fft: FftPlanner::new().plan_fft_forward(FFT_SIZE),
            window: hanning_iter(FFT_SIZE).map(|x| x as f32).collect(),
            buffer: vec![0.0; FFT_SIZE],
            filled: 0,
            scratch: vec![Complex32::new(0.0, 0.0); FFT_SIZE],
            smoothed: vec![0.0; SPECTRUM_BINS],
            bins: vec![0; SPECTRUM_BINS],
        }
    }

    /// Byte-valued magnitude per frequency bin, most recent snapshot.
    pub fn snapshot(&self) -> &[u8] {
        &self.bins
    }

    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Drains pending samples and recomputes the snapshot for every full
    /// window collected. Call once per UI frame.
    pub fn update(&mut self) {
        loop {
            let taken = self.cons.pop_slice(&mut self.buffer[self.filled..]);
            self.filled += taken;

            if self.filled < FFT_SIZE {
                return;
            }

            self.process_window();

            // 50% overlap
            self.buffer.copy_within(FFT_SIZE / 2.., 0);
            self.filled = FFT_SIZE / 2;

            if taken == 0 {
                return;
            }
        }
    }

    fn process_window(&mut self) {
        for i in 0..FFT_SIZE {
            self.scratch[i] = Complex32::new(self.buffer[i] * self.window[i], 0.0);
        }
        self.fft.process(&mut self.scratch);

        let scale = 2.0 / FFT_SIZE as f32;
        let db_span = SPECTRUM_MAX_DB - SPECTRUM_MIN_DB;

        for i in 0..SPECTRUM_BINS {
            let magnitude = self.scratch[i].norm() * scale;
            self.smoothed[i] = SPECTRUM_SMOOTHING * self.smoothed[i]
                + (1.0 - SPECTRUM_SMOOTHING) * magnitude;

            let db = 20.0 * (self.smoothed[i] + 1e-10).log10();
            let normalized = (db - SPECTRUM_MIN_DB) / db_span;
            self.bins[i] = (normalized.clamp(0.0, 1.0) * 255.0) as u8;
        }
    }

    /// Drops buffered samples and zeroes the snapshot. Used when playback
    /// stops so a stale spectrum never reappears on resume.
    pub fn reset(&mut self) {
        self.cons.clear();
        self.filled = 0;
        self.smoothed.fill(0.0);
        self.bins.fill(0);
    }
}
