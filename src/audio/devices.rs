use cpal::traits::{DeviceTrait, HostTrait};
use cpal::{Device, Host, SampleFormat, SampleRate, StreamConfig, SupportedStreamConfigRange};

use crate::config::{CHANNELS, PREFERRED_SAMPLE_RATES};
use crate::error::EngineError;

pub fn default_output_device(host: &Host) -> Result<Device, EngineError> {
    host.default_output_device()
        .ok_or(EngineError::NoOutputDevice)
}

/// Picks the output stream config, preferring the high sample rates that
/// keep the whole filter bank below Nyquist and falling back to the device
/// default where the hardware supports neither.
pub fn preferred_output_config(device: &Device) -> Result<StreamConfig, EngineError> {
    let ranges: Vec<_> = device
        .supported_output_configs()?
        .filter(|range| range.sample_format() == SampleFormat::F32)
        .collect();

    let supports = |range: &&SupportedStreamConfigRange, rate: SampleRate| {
        range.min_sample_rate() <= rate && rate <= range.max_sample_rate()
    };

    for &rate in &PREFERRED_SAMPLE_RATES {
        let rate = SampleRate(rate);
        let range = ranges
            .iter()
            .find(|range| range.channels() as usize == CHANNELS && supports(range, rate))
            .or_else(|| ranges.iter().find(|range| supports(range, rate)));

        if let Some(range) = range {
            return Ok(range.clone().with_sample_rate(rate).config());
        }
    }

    let default = device.default_output_config()?;
    if default.sample_format() != SampleFormat::F32 {
        return Err(EngineError::UnsupportedSampleFormat);
    }

    Ok(default.config())
}
