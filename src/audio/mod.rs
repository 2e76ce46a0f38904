pub mod analyzer;
pub mod devices;
pub mod playback;
pub mod state;

pub use analyzer::SpectrumAnalyzer;
pub use playback::{PlaybackController, PlaybackState};
pub use state::AudioState;
