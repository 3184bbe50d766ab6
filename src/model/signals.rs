use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub rgb: [u8; 3],
    pub mood: &'static str,
}

// Iteration order decides ties in nearest-colour lookup.
const PALETTE: &[PaletteColor] = &[
    PaletteColor { name: "red", rgb: [0xff, 0x00, 0x00], mood: "Angry/Passionate" },
    PaletteColor { name: "blue", rgb: [0x00, 0x00, 0xff], mood: "Calm/Peaceful" },
    PaletteColor { name: "green", rgb: [0x00, 0xff, 0x00], mood: "Balanced/Hopeful" },
    PaletteColor { name: "yellow", rgb: [0xff, 0xff, 0x00], mood: "Happy/Energetic" },
    PaletteColor { name: "orange", rgb: [0xff, 0xa5, 0x00], mood: "Excited/Enthusiastic" },
    PaletteColor { name: "purple", rgb: [0x80, 0x00, 0x80], mood: "Creative/Mysterious" },
    PaletteColor { name: "pink", rgb: [0xff, 0xc0, 0xcb], mood: "Loving/Playful" },
    PaletteColor { name: "brown", rgb: [0xa5, 0x2a, 0x2a], mood: "Stable/Grounded" },
    PaletteColor { name: "black", rgb: [0x00, 0x00, 0x00], mood: "Depressed/Anxious" },
    PaletteColor { name: "white", rgb: [0xff, 0xff, 0xff], mood: "Pure/Innocent" },
    PaletteColor { name: "gray", rgb: [0x80, 0x80, 0x80], mood: "Neutral/Indifferent" },
    PaletteColor { name: "teal", rgb: [0x00, 0x80, 0x80], mood: "Refreshed/Calm" },
    PaletteColor { name: "magenta", rgb: [0xff, 0x00, 0xff], mood: "Bold/Innovative" },
    PaletteColor { name: "lavender", rgb: [0xe6, 0xe6, 0xfa], mood: "Relaxed/Serene" },
    PaletteColor { name: "gold", rgb: [0xff, 0xd7, 0x00], mood: "Joyful/Optimistic" },
    PaletteColor { name: "silver", rgb: [0xc0, 0xc0, 0xc0], mood: "Calm/Reflective" },
    PaletteColor { name: "turquoise", rgb: [0x40, 0xe0, 0xd0], mood: "Refreshed/Calm" },
    PaletteColor { name: "maroon", rgb: [0x80, 0x00, 0x00], mood: "Serious/Disciplined" },
    PaletteColor { name: "navy", rgb: [0x00, 0x00, 0x80], mood: "Trusting/Reliable" },
    PaletteColor { name: "beige", rgb: [0xf5, 0xf5, 0xdc], mood: "Comfortable/Relaxed" },
];

pub fn palette() -> &'static [PaletteColor] {
    PALETTE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// Polarity in [-1, 1] and subjectivity in [0, 1] from an external text analyser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub polarity: f32,
    pub subjectivity: f32,
}

/// One label from the external face-emotion detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceEmotion {
    pub label: String,
    pub confidence: f32,
}
