pub const CHANNELS: usize = 2;

// Frequency segmentation of the audible range
pub const MAX_RANGE_HZ: f32 = 24000.0;
pub const SEGMENT_STEP: f32 = 0.25;

// Control ranges
pub const ANGLE_MIN: f32 = 0.0;
pub const ANGLE_MAX: f32 = 85.0;
pub const CENTER_MIN: f32 = 0.2;
pub const CENTER_MAX: f32 = 1.0;

// Initial control values
pub const DEFAULT_ANGLE: f32 = 85.0;
pub const DEFAULT_CENTER: f32 = 0.5;
pub const DEFAULT_VOLUME: f32 = 25.0;

// `0.5` prevents distortion at full volume
pub const VOLUME_HEADROOM: f32 = 0.5;

// High sample rates keep every segment below Nyquist; most desktop
// hardware supports neither, so the device default is the last resort.
pub const PREFERRED_SAMPLE_RATES: [u32; 2] = [320_000, 192_000];

pub const FFT_SIZE: usize = 2048;
pub const SPECTRUM_BINS: usize = FFT_SIZE / 2;
pub const SPECTRUM_SMOOTHING: f32 = 0.8;
pub const SPECTRUM_MIN_DB: f32 = -100.0;
pub const SPECTRUM_MAX_DB: f32 = -30.0;

// Audio callback -> analyzer ring capacity, a few FFT windows worth
pub const ANALYZER_RING_CAPACITY: usize = FFT_SIZE * 8;

// Spectrum frames kept for the fading trail
pub const TRAIL_FRAMES: usize = 8;
