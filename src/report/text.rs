use crate::model::scores::ScoreResult;
use crate::pipeline::color::ColorMood;
use crate::pipeline::session::{AssessmentReport, FaceSummary, SessionReport};
use crate::pipeline::sentiment::SentimentSummary;
use crate::pipeline::voice::{NO_SPEECH_MESSAGE, VoiceAnalysis};
use crate::report::{DISCLAIMER, capitalize, format_f32_2, format_f64_1};

pub fn render_report_text(report: &SessionReport) -> String {
    let mut out = String::new();

    out.push_str("Emotional State Report\n");
    out.push_str("======================\n\n");
    out.push_str(&format!("Note: {}\n\n", DISCLAIMER));

    out.push_str("1. Color mood\n");
    match &report.color {
        Some(color) => out.push_str(&render_color_text(color)),
        None => out.push_str("No color selected.\n"),
    }
    out.push('\n');

    out.push_str("2. Text sentiment\n");
    match &report.sentiment {
        Some(sentiment) => out.push_str(&render_sentiment_text(sentiment)),
        None => out.push_str("No sentiment reading supplied.\n"),
    }
    out.push('\n');

    out.push_str("3. Voice analysis\n");
    match &report.voice {
        Some(voice) => out.push_str(&render_voice_text(voice)),
        None => out.push_str("No recording analysed.\n"),
    }
    out.push('\n');

    out.push_str("4. Emotion assessment\n");
    match &report.assessment {
        Some(assessment) => out.push_str(&render_assessment_text(assessment)),
        None => out.push_str("No assessment taken.\n"),
    }

    if let Some(face) = &report.face {
        out.push('\n');
        out.push_str("5. Facial emotion\n");
        out.push_str(&render_face_text(face));
    }

    out
}

pub fn render_color_text(color: &ColorMood) -> String {
    format!(
        "Nearest color: {} (distance {})\nColor mood: {}\n",
        color.nearest,
        format_f64_1(color.distance),
        color.mood
    )
}

pub fn render_sentiment_text(sentiment: &SentimentSummary) -> String {
    format!(
        "Sentiment: {} (Polarity: {}, Subjectivity: {})\n",
        sentiment.label.as_str(),
        format_f32_2(sentiment.polarity),
        format_f32_2(sentiment.subjectivity)
    )
}

pub fn render_voice_text(voice: &VoiceAnalysis) -> String {
    let Some(profile) = voice.profile() else {
        return format!("{}\n", NO_SPEECH_MESSAGE);
    };

    let mut out = String::new();
    out.push_str(&format!(
        "Average pitch: {} Hz\n",
        format_f64_1(profile.mean_pitch_hz)
    ));
    out.push_str(&format!(
        "Pitch variability: {} Hz\n",
        format_f64_1(profile.pitch_std_hz)
    ));
    out.push_str(&format!(
        "Speech continuity: {}% voiced\n",
        format_f64_1(profile.voiced_ratio_percent)
    ));
    out.push_str("Emotional indicators:\n");
    for item in &profile.interpretation {
        out.push_str(&format!("  • {}\n", capitalize(item)));
    }
    out
}

pub fn render_assessment_text(assessment: &AssessmentReport) -> String {
    let mut out = format!("Instrument: {}\n", assessment.instrument);
    out.push_str(&render_score_text(&assessment.result));
    out
}

pub fn render_score_text(result: &ScoreResult) -> String {
    match result {
        ScoreResult::Simple { total, label } => format!("Result: {} (total {})\n", label, total),
        ScoreResult::Unlabeled { total } => {
            format!("Result: {} (total {})\n", result.label(), total)
        }
        ScoreResult::Subscaled { subscales } => {
            let mut out = String::new();
            for s in subscales {
                out.push_str(&format!("{}: {} ({})\n", s.name, s.score, s.label()));
            }
            out
        }
    }
}

pub fn render_face_text(face: &FaceSummary) -> String {
    let mut out = format!(
        "Dominant: {} ({})\n",
        face.dominant.label,
        format_f32_2(face.dominant.confidence)
    );
    if face.readings.len() > 1 {
        let all = face
            .readings
            .iter()
            .map(|r| format!("{} {}", r.label, format_f32_2(r.confidence)))
            .collect::<Vec<_>>();
        out.push_str(&format!("All readings: {}\n", all.join(", ")));
    }
    out
}
