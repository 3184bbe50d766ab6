use serde::Serialize;
use thiserror::Error;

use crate::error::{AcousticError, ScoreError};
use crate::input::{DecodedAudio, SessionInputs};
use crate::instruments::Registry;
use crate::model::scores::ScoreResult;
use crate::model::signals::FaceEmotion;
use crate::model::thresholds::AcousticProfile;
use crate::pipeline::color::{ColorError, ColorMood, color_mood, parse_hex};
use crate::pipeline::score::score_instrument;
use crate::pipeline::sentiment::{JournalCheck, SentimentSummary, check_journal, summarize};
use crate::pipeline::voice::{VoiceAnalysis, analyze_voice};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{validated} of {required} sections validated: {}", .missing.join("; "))]
    NotValidated {
        validated: usize,
        required: usize,
        missing: Vec<String>,
    },

    #[error(transparent)]
    Score(#[from] ScoreError),

    #[error(transparent)]
    Acoustic(#[from] AcousticError),

    #[error(transparent)]
    Color(#[from] ColorError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Color,
    Text,
    Assessment,
    Voice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationCheck {
    pub section: Section,
    pub ok: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub checks: Vec<ValidationCheck>,
}

impl Validation {
    pub fn validated_count(&self) -> usize {
        self.checks.iter().filter(|c| c.ok).count()
    }

    pub fn all_valid(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }
}

pub fn validate_session(session: &SessionInputs) -> Validation {
    let color = match session
        .color
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(parse_hex)
    {
        Some(Ok(_)) => check(Section::Color, true, "Color input valid"),
        Some(Err(_)) => check(Section::Color, false, "Please select a valid color"),
        None => check(Section::Color, false, "Please select a color"),
    };

    let text = match &session.journal {
        None => check(
            Section::Text,
            false,
            "Please write about how you are feeling",
        ),
        Some(journal) => match check_journal(&journal.text) {
            JournalCheck::Missing => check(
                Section::Text,
                false,
                "Please write about how you are feeling",
            ),
            JournalCheck::TooShort => check(
                Section::Text,
                false,
                "Text too short for analysis. Please write more.",
            ),
            JournalCheck::Ok if journal.sentiment.is_none() => check(
                Section::Text,
                false,
                "Text has no sentiment reading. Please run the text analyser.",
            ),
            JournalCheck::Ok => check(Section::Text, true, "Text input valid"),
        },
    };

    let assessment = match &session.assessment {
        Some(a) if a.has_responses() => check(Section::Assessment, true, "Emotion assessment valid"),
        _ => check(Section::Assessment, false, "Please answer all questions"),
    };

    let voice = match &session.voice {
        Some(_) => check(Section::Voice, true, "Voice recording valid"),
        None => check(Section::Voice, false, "Please record your voice"),
    };

    Validation {
        checks: vec![color, text, assessment, voice],
    }
}

fn check(section: Section, ok: bool, message: &'static str) -> ValidationCheck {
    ValidationCheck {
        section,
        ok,
        message,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub instrument: &'static str,
    pub code: &'static str,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceSummary {
    pub dominant: FaceEmotion,
    pub readings: Vec<FaceEmotion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub color: Option<ColorMood>,
    pub sentiment: Option<SentimentSummary>,
    pub voice: Option<VoiceAnalysis>,
    pub assessment: Option<AssessmentReport>,
    pub face: Option<FaceSummary>,
}

/// Runs every analyser over a fully validated session. `audio` is the decoded voice recording.
pub fn analyze_session(
    session: &SessionInputs,
    audio: Option<&DecodedAudio>,
    registry: &Registry,
    profile: &AcousticProfile,
) -> Result<SessionReport, SessionError> {
    let validation = validate_session(session);
    if !validation.all_valid() {
        let missing = validation
            .checks
            .iter()
            .filter(|c| !c.ok)
            .map(|c| c.message.to_string())
            .collect::<Vec<_>>();
        tracing::warn!(
            validated = validation.validated_count(),
            "session rejected before analysis"
        );
        return Err(SessionError::NotValidated {
            validated: validation.validated_count(),
            required: validation.checks.len(),
            missing,
        });
    }

    let color = match &session.color {
        Some(hex) => Some(color_mood(hex)?),
        None => None,
    };

    let sentiment = session
        .journal
        .as_ref()
        .and_then(|j| j.sentiment)
        .map(summarize);

    let voice = match audio {
        Some(audio) => Some(analyze_voice(&audio.samples, audio.sample_rate, profile)?),
        None => None,
    };

    let assessment = match &session.assessment {
        Some(input) => {
            let instrument = registry.find(&input.instrument)?;
            let responses = input.response_vector(instrument)?;
            Some(AssessmentReport {
                instrument: instrument.id,
                code: instrument.code,
                result: score_instrument(instrument, &responses)?,
            })
        }
        None => None,
    };

    Ok(SessionReport {
        color,
        sentiment,
        voice,
        assessment,
        face: summarize_face(&session.face),
    })
}

/// Highest-confidence reading wins; the earlier reading wins a tie.
pub fn summarize_face(readings: &[FaceEmotion]) -> Option<FaceSummary> {
    let mut dominant: Option<&FaceEmotion> = None;
    for reading in readings {
        match dominant {
            Some(best) if reading.confidence <= best.confidence => {}
            _ => dominant = Some(reading),
        }
    }
    dominant.map(|d| FaceSummary {
        dominant: d.clone(),
        readings: readings.to_vec(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/session.rs"]
mod tests;
