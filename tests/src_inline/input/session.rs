use super::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::instruments::loader::load_registry;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("emostate_session_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

const FULL: &str = r##"{
    "color": "#3366cc",
    "journal": {
        "text": "Today felt long but I managed to finish the project and call a friend.",
        "sentiment": { "polarity": 0.25, "subjectivity": 0.6 }
    },
    "assessment": { "instrument": "PHQ-9", "choices": [0, 1, 2, 3, 0, 1, 2, 3, 0] },
    "voice": { "wav": "clip.wav" },
    "face": [{ "label": "happy", "confidence": 0.8 }]
}"##;

#[test]
fn test_parse_full_session() {
    let session = parse_session(FULL).unwrap();
    assert_eq!(session.color.as_deref(), Some("#3366cc"));
    let journal = session.journal.unwrap();
    assert_eq!(journal.sentiment.unwrap().polarity, 0.25);
    assert_eq!(session.assessment.unwrap().choices.unwrap().len(), 9);
    assert_eq!(session.voice.unwrap().wav, PathBuf::from("clip.wav"));
    assert_eq!(session.face[0].label, "happy");
}

#[test]
fn test_parse_empty_session_defaults() {
    let session = parse_session("{}").unwrap();
    assert!(session.color.is_none());
    assert!(session.journal.is_none());
    assert!(session.assessment.is_none());
    assert!(session.voice.is_none());
    assert!(session.face.is_empty());
}

#[test]
fn test_unknown_fields_rejected() {
    assert!(matches!(
        parse_session(r##"{ "colour": "#ffffff" }"##),
        Err(InputError::Json(_))
    ));
    assert!(parse_session(r#"{ "assessment": { "instrument": "K10", "answers": [1] } }"#).is_err());
}

#[test]
fn test_response_vector_prefers_weights() {
    let registry = load_registry().unwrap();
    let k10 = registry.find("K10").unwrap();

    let input = AssessmentInput {
        instrument: "K10".to_string(),
        weights: Some(vec![5; 10]),
        choices: Some(vec![0; 10]),
    };
    assert!(input.has_responses());
    assert_eq!(input.response_vector(k10).unwrap(), vec![5; 10]);

    let input = AssessmentInput {
        weights: None,
        ..input
    };
    assert_eq!(input.response_vector(k10).unwrap(), vec![1; 10]);

    let empty = AssessmentInput {
        instrument: "K10".to_string(),
        weights: None,
        choices: None,
    };
    assert!(!empty.has_responses());
    assert!(matches!(
        empty.response_vector(k10),
        Err(ScoreError::InvalidResponse { .. })
    ));
}

#[test]
fn test_load_session_resolves_wav_relative_to_file() {
    let dir = make_temp_dir();
    let path = dir.join("session.json");
    fs::write(&path, FULL).unwrap();

    let session = load_session(&path).unwrap();
    assert_eq!(session.voice.unwrap().wav, dir.join("clip.wav"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_session_missing_file() {
    let dir = make_temp_dir();
    let err = load_session(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    fs::remove_dir_all(&dir).unwrap();
}
