use std::f32::consts::PI;

/// Bandpass biquad (constant 0 dB peak gain, Audio EQ Cookbook).
pub struct BandpassFilter {
    b0: f32, b1: f32, b2: f32, // Numerator coefficients
    a1: f32, a2: f32, // Denominator coefficients

    // State variables for the filter
    x1: f32, x2: f32, // Previous inputs
    y1: f32, y2: f32, // Previous outputs
}

impl BandpassFilter {
    pub fn new(sample_rate: f32, center_hz: f32, q: f32) -> Self {
        // Centers at or above Nyquist make the biquad unstable; clamp so the
        // bank still builds at ordinary device rates.
        let center_hz = center_hz.min(sample_rate * 0.45);
        let q = q.max(0.001);

        let omega = 2.0 * PI * center_hz / sample_rate;
        let alpha = omega.sin() / (2.0 * q);
        let cos_omega = omega.cos();

        let a0 = 1.0 + alpha;

        Self {
            b0: alpha / a0,
            b1: 0.0,
            b2: -alpha / a0,
            a1: -2.0 * cos_omega / a0,
            a2: (1.0 - alpha) / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        // Direct Form 1 implementation
        let output = self.b0 * input + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;

        // Update state
        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}
