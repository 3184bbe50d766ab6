use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ScoreError;
use crate::input::InputError;
use crate::instruments::Instrument;
use crate::model::signals::{FaceEmotion, SentimentReading};

/// Raw inputs collected for one session, as written by the capture front end.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionInputs {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub journal: Option<JournalInput>,
    #[serde(default)]
    pub assessment: Option<AssessmentInput>,
    #[serde(default)]
    pub voice: Option<VoiceInput>,
    #[serde(default)]
    pub face: Vec<FaceEmotion>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JournalInput {
    pub text: String,
    #[serde(default)]
    pub sentiment: Option<SentimentReading>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentInput {
    pub instrument: String,
    /// Item weights, in item order.
    #[serde(default)]
    pub weights: Option<Vec<u32>>,
    /// Chosen option positions, in item order.
    #[serde(default)]
    pub choices: Option<Vec<usize>>,
}

impl AssessmentInput {
    pub fn has_responses(&self) -> bool {
        self.weights.as_ref().is_some_and(|w| !w.is_empty())
            || self.choices.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Weights win over choices when both are present.
    pub fn response_vector(&self, instrument: &Instrument) -> Result<Vec<u32>, ScoreError> {
        if let Some(weights) = &self.weights {
            return Ok(weights.clone());
        }
        if let Some(choices) = &self.choices {
            return instrument.weights_for_choices(choices);
        }
        Err(ScoreError::InvalidResponse {
            instrument: instrument.id.to_string(),
            reason: "no responses supplied".to_string(),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceInput {
    pub wav: PathBuf,
}

pub fn parse_session(json: &str) -> Result<SessionInputs, InputError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a session file; a relative WAV path is taken relative to the file's directory.
pub fn load_session(path: &Path) -> Result<SessionInputs, InputError> {
    let json = std::fs::read_to_string(path).map_err(|e| InputError::io(path, e))?;
    let mut session = parse_session(&json)?;
    if let Some(voice) = session.voice.as_mut() {
        if voice.wav.is_relative() {
            if let Some(dir) = path.parent() {
                voice.wav = dir.join(&voice.wav);
            }
        }
    }
    Ok(session)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/session.rs"]
mod tests;
