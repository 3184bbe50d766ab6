use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::input::InputError;

/// Mono waveform in [-1, 1] plus its sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub source_channels: u16,
}

impl DecodedAudio {
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

pub fn decode_wav(path: &Path) -> Result<DecodedAudio, InputError> {
    let reader = WavReader::open(path)?;
    let decoded = decode_reader(reader)?;
    tracing::info!(
        path = %path.display(),
        sample_rate = decoded.sample_rate,
        channels = decoded.source_channels,
        seconds = decoded.duration_secs(),
        "decoded recording"
    );
    Ok(decoded)
}

pub fn decode_reader<R: Read>(reader: WavReader<R>) -> Result<DecodedAudio, InputError> {
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(InputError::InvalidInput("WAV has zero channels".to_string()));
    }

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.into_samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            if spec.bits_per_sample == 0 || spec.bits_per_sample > 32 {
                return Err(InputError::InvalidInput(format!(
                    "unsupported bit depth {}",
                    spec.bits_per_sample
                )));
            }
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<Result<_, _>>()?
        }
    };

    Ok(DecodedAudio {
        samples: downmix(&interleaved, spec.channels),
        sample_rate: spec.sample_rate,
        source_channels: spec.channels,
    })
}

fn downmix(interleaved: &[f32], channels: u16) -> Vec<f32> {
    let channels = channels as usize;
    if channels == 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/wav.rs"]
mod tests;
