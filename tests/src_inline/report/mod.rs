use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::model::indicators::{FlowBand, Indicators, PitchBand, VariabilityBand};
use crate::model::scores::{ScoreResult, SubscaleScore};
use crate::model::signals::{FaceEmotion, SentimentLabel};
use crate::model::thresholds::VoicedRatioBasis;
use crate::pipeline::color::color_mood;
use crate::pipeline::session::{AssessmentReport, FaceSummary, Section, ValidationCheck};
use crate::pipeline::sentiment::SentimentSummary;
use crate::pipeline::voice::{PitchProfile, VoiceAnalysis};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("emostate_report_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_report() -> SessionReport {
    let indicators = Indicators {
        pitch: PitchBand::Elevated,
        variability: VariabilityBand::Normal,
        flow: FlowBand::NormalFlow,
    };
    SessionReport {
        color: Some(color_mood("#ffd700").unwrap()),
        sentiment: Some(SentimentSummary {
            label: SentimentLabel::Positive,
            polarity: 0.4,
            subjectivity: 0.55,
        }),
        voice: Some(VoiceAnalysis::Profile(PitchProfile {
            mean_pitch_hz: 201.34,
            pitch_std_hz: 22.0,
            voiced_ratio_percent: 71.5,
            voiced_ratio_basis: VoicedRatioBasis::Frames,
            voiced_frames: 43,
            total_frames: 60,
            interpretation: indicators.labels(),
            indicators,
        })),
        assessment: Some(AssessmentReport {
            instrument: "PANAS (Positive and Negative Affect Schedule)",
            code: "PANAS",
            result: ScoreResult::Subscaled {
                subscales: vec![
                    SubscaleScore {
                        name: "Positive Affect",
                        score: 34,
                        interpretation: Some("Higher scores indicate more positive emotions"),
                    },
                    SubscaleScore {
                        name: "Negative Affect",
                        score: 18,
                        interpretation: None,
                    },
                ],
            },
        }),
        face: None,
    }
}

fn all_valid() -> Validation {
    Validation {
        checks: vec![ValidationCheck {
            section: Section::Color,
            ok: true,
            message: "Color input valid",
        }],
    }
}

#[test]
fn test_capitalize() {
    assert_eq!(capitalize("moderate pitch"), "Moderate pitch");
    assert_eq!(capitalize("HIGH"), "High");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_formatting_helpers() {
    assert_eq!(format_f64_1(201.34), "201.3");
    assert_eq!(format_f32_2(0.5), "0.50");
}

#[test]
fn test_render_report_text_sections() {
    let text = text::render_report_text(&sample_report());
    assert!(text.starts_with("Emotional State Report\n"));
    assert!(text.contains(DISCLAIMER));
    assert!(text.contains("Nearest color: gold (distance 0.0)\nColor mood: Joyful/Optimistic\n"));
    assert!(text.contains("Sentiment: Positive (Polarity: 0.40, Subjectivity: 0.55)\n"));
    assert!(text.contains("Average pitch: 201.3 Hz\n"));
    assert!(text.contains("Speech continuity: 71.5% voiced\n"));
    assert!(text.contains("  • Elevated pitch (could indicate stress or anxiety)\n"));
    assert!(text.contains("  • Normal speech flow\n"));
    assert!(text.contains("Positive Affect: 34 (Higher scores indicate more positive emotions)\n"));
    assert!(text.contains("Negative Affect: 18 (No interpretation available)\n"));
    assert!(!text.contains("5. Facial emotion"));
}

#[test]
fn test_render_empty_sections_and_face() {
    let report = SessionReport {
        color: None,
        sentiment: None,
        voice: Some(VoiceAnalysis::NoSpeechDetected),
        assessment: None,
        face: Some(FaceSummary {
            dominant: FaceEmotion {
                label: "happy".to_string(),
                confidence: 0.9,
            },
            readings: vec![
                FaceEmotion {
                    label: "happy".to_string(),
                    confidence: 0.9,
                },
                FaceEmotion {
                    label: "neutral".to_string(),
                    confidence: 0.1,
                },
            ],
        }),
    };
    let text = text::render_report_text(&report);
    assert!(text.contains("No color selected.\n"));
    assert!(text.contains("No speech detected in audio\n"));
    assert!(text.contains("No assessment taken.\n"));
    assert!(text.contains("5. Facial emotion\nDominant: happy (0.90)\n"));
    assert!(text.contains("All readings: happy 0.90, neutral 0.10\n"));
}

#[test]
fn test_render_score_text_simple_and_unlabeled() {
    let simple = ScoreResult::Simple {
        total: 12,
        label: "Moderate depression",
    };
    assert_eq!(
        text::render_score_text(&simple),
        "Result: Moderate depression (total 12)\n"
    );
    let unlabeled = ScoreResult::Unlabeled { total: 9 };
    assert_eq!(
        text::render_score_text(&unlabeled),
        "Result: No interpretation available (total 9)\n"
    );
}

#[test]
fn test_write_reports() {
    let dir = make_temp_dir();
    let out = dir.join("nested").join("out");
    let report = sample_report();
    let validation = all_valid();
    let summary = SummaryData::new(&validation, &report);

    let written = write_reports(&summary, &out).unwrap();
    assert_eq!(written.report_txt, out.join("report.txt"));

    let text = fs::read_to_string(&written.report_txt).unwrap();
    assert_eq!(text, text::render_report_text(&report));

    let json = fs::read_to_string(&written.summary_json).unwrap();
    assert!(json.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], TOOL_NAME);
    assert_eq!(value["validation"]["checks"][0]["section"], "color");
    assert_eq!(value["report"]["color"]["nearest"], "gold");
    assert_eq!(value["report"]["voice"]["kind"], "profile");
    assert_eq!(value["report"]["assessment"]["result"]["kind"], "subscaled");
    assert!(value["report"]["face"].is_null());

    fs::remove_dir_all(&dir).unwrap();
}
