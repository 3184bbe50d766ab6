use serde::Serialize;

use crate::error::AcousticError;
use crate::model::indicators::{FlowBand, Indicators, PitchBand, VariabilityBand};
use crate::model::thresholds::{AcousticProfile, VoicedRatioBasis};
use crate::pipeline::pitch::track_pitch;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchProfile {
    pub mean_pitch_hz: f64,
    pub pitch_std_hz: f64,
    pub voiced_ratio_percent: f64,
    pub voiced_ratio_basis: VoicedRatioBasis,
    pub voiced_frames: usize,
    pub total_frames: usize,
    pub indicators: Indicators,
    pub interpretation: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoiceAnalysis {
    Profile(PitchProfile),
    NoSpeechDetected,
}

impl VoiceAnalysis {
    pub fn profile(&self) -> Option<&PitchProfile> {
        match self {
            VoiceAnalysis::Profile(p) => Some(p),
            VoiceAnalysis::NoSpeechDetected => None,
        }
    }
}

pub const NO_SPEECH_MESSAGE: &str = "No speech detected in audio";

/// Pitch statistics and qualitative indicators for one decoded mono recording.
pub fn analyze_voice(
    signal: &[f32],
    sample_rate: u32,
    profile: &AcousticProfile,
) -> Result<VoiceAnalysis, AcousticError> {
    if sample_rate == 0 {
        return Err(AcousticError::InvalidSampleRate(sample_rate));
    }

    let track = track_pitch(signal, sample_rate, profile);
    let voiced = track.voiced();
    tracing::debug!(
        samples = signal.len(),
        frames = track.total_frames(),
        voiced = voiced.len(),
        "pitch track computed"
    );

    if voiced.is_empty() {
        return Ok(VoiceAnalysis::NoSpeechDetected);
    }

    let mean = voiced.iter().sum::<f64>() / voiced.len() as f64;
    let variance = voiced.iter().map(|f| (f - mean) * (f - mean)).sum::<f64>() / voiced.len() as f64;
    let std = variance.sqrt();

    let denominator = match profile.voiced_ratio_basis {
        VoicedRatioBasis::Frames => track.total_frames(),
        VoicedRatioBasis::Samples => signal.len(),
    };
    let ratio = voiced.len() as f64 / denominator as f64 * 100.0;

    let indicators = Indicators {
        pitch: PitchBand::classify(mean, &profile.pitch_edges_hz),
        variability: VariabilityBand::classify(std, &profile.variability_edges_hz),
        flow: FlowBand::classify(ratio, &profile.voiced_ratio_edges),
    };

    Ok(VoiceAnalysis::Profile(PitchProfile {
        mean_pitch_hz: round1(mean),
        pitch_std_hz: round1(std),
        voiced_ratio_percent: round1(ratio),
        voiced_ratio_basis: profile.voiced_ratio_basis,
        voiced_frames: voiced.len(),
        total_frames: track.total_frames(),
        interpretation: indicators.labels(),
        indicators,
    }))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/voice.rs"]
mod tests;
