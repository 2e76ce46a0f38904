use thiserror::Error;

/// Errors raised while constructing the audio session.
///
/// Everything here is an initialization failure: the app shows it and the
/// user may retry by pressing start again, which rebuilds the whole session.
/// Runtime stream hiccups are reported through the cpal error callback and
/// never abort playback.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no output device available")]
    NoOutputDevice,

    #[error("output device does not support f32 samples")]
    UnsupportedSampleFormat,

    #[error("failed to query output configs: {0}")]
    SupportedConfigs(#[from] cpal::SupportedStreamConfigsError),

    #[error("failed to query default output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
}
