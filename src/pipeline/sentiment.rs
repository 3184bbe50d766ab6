use serde::Serialize;

use crate::model::signals::{SentimentLabel, SentimentReading};

pub const POLARITY_THRESHOLD: f32 = 0.1;
pub const MIN_JOURNAL_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub label: SentimentLabel,
    pub polarity: f32,
    pub subjectivity: f32,
}

pub fn sentiment_label(polarity: f32) -> SentimentLabel {
    if polarity > POLARITY_THRESHOLD {
        SentimentLabel::Positive
    } else if polarity < -POLARITY_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

pub fn summarize(reading: SentimentReading) -> SentimentSummary {
    SentimentSummary {
        label: sentiment_label(reading.polarity),
        polarity: reading.polarity,
        subjectivity: reading.subjectivity,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalCheck {
    Missing,
    TooShort,
    Ok,
}

pub fn check_journal(text: &str) -> JournalCheck {
    let chars = text.chars().count();
    if chars == 0 {
        JournalCheck::Missing
    } else if chars < MIN_JOURNAL_CHARS {
        JournalCheck::TooShort
    } else {
        JournalCheck::Ok
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/sentiment.rs"]
mod tests;
