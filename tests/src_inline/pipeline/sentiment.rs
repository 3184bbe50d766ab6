use super::*;

#[test]
fn test_sentiment_label_thresholds() {
    assert_eq!(sentiment_label(0.11), SentimentLabel::Positive);
    assert_eq!(sentiment_label(0.1), SentimentLabel::Neutral);
    assert_eq!(sentiment_label(0.0), SentimentLabel::Neutral);
    assert_eq!(sentiment_label(-0.1), SentimentLabel::Neutral);
    assert_eq!(sentiment_label(-0.5), SentimentLabel::Negative);
}

#[test]
fn test_check_journal_lengths() {
    assert_eq!(check_journal(""), JournalCheck::Missing);
    assert_eq!(check_journal("short entry"), JournalCheck::TooShort);
    let long = "a".repeat(MIN_JOURNAL_CHARS);
    assert_eq!(check_journal(&long), JournalCheck::Ok);
}

#[test]
fn test_summarize_keeps_reading() {
    let summary = summarize(SentimentReading {
        polarity: -0.25,
        subjectivity: 0.8,
    });
    assert_eq!(summary.label, SentimentLabel::Negative);
    assert_eq!(summary.label.as_str(), "Negative");
    assert_eq!(summary.subjectivity, 0.8);
}

#[test]
fn test_journal_length_counts_characters() {
    let accented = "é".repeat(MIN_JOURNAL_CHARS - 1);
    assert_eq!(check_journal(&accented), JournalCheck::TooShort);
}
