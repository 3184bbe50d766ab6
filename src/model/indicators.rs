use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchBand {
    Low,
    Moderate,
    Elevated,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariabilityBand {
    Monotone,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowBand {
    FrequentPauses,
    NormalFlow,
    RapidSpeech,
}

impl PitchBand {
    pub fn classify(mean_hz: f64, edges: &[f64; 4]) -> Self {
        if mean_hz < edges[0] {
            PitchBand::Low
        } else if mean_hz < edges[1] {
            PitchBand::Moderate
        } else if mean_hz < edges[2] {
            PitchBand::Elevated
        } else if mean_hz < edges[3] {
            PitchBand::High
        } else {
            PitchBand::VeryHigh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PitchBand::Low => "low pitch (possibly indicating sadness, fatigue, or depression)",
            PitchBand::Moderate => "moderate pitch (typical for calm, relaxed speech)",
            PitchBand::Elevated => "elevated pitch (could indicate stress or anxiety)",
            PitchBand::High => "high pitch (may suggest excitement or anxiety)",
            PitchBand::VeryHigh => "very high pitch (could indicate strong emotions)",
        }
    }
}

impl VariabilityBand {
    pub fn classify(std_hz: f64, edges: &[f64; 2]) -> Self {
        if std_hz < edges[0] {
            VariabilityBand::Monotone
        } else if std_hz < edges[1] {
            VariabilityBand::Normal
        } else {
            VariabilityBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VariabilityBand::Monotone => {
                "monotonous speech (possibly indicating depression or fatigue)"
            }
            VariabilityBand::Normal => "normal pitch variation",
            VariabilityBand::High => {
                "high pitch variability (may suggest emotional stress or excitement)"
            }
        }
    }
}

impl FlowBand {
    pub fn classify(voiced_percent: f64, edges: &[f64; 2]) -> Self {
        if voiced_percent < edges[0] {
            FlowBand::FrequentPauses
        } else if voiced_percent < edges[1] {
            FlowBand::NormalFlow
        } else {
            FlowBand::RapidSpeech
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowBand::FrequentPauses => "frequent pauses (could indicate anxiety or cognitive load)",
            FlowBand::NormalFlow => "normal speech flow",
            FlowBand::RapidSpeech => "rapid speech (may suggest excitement or stress)",
        }
    }
}

/// The three acoustic axes of one recording, reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicators {
    pub pitch: PitchBand,
    pub variability: VariabilityBand,
    pub flow: FlowBand,
}

impl Indicators {
    pub fn labels(&self) -> Vec<String> {
        vec![
            self.pitch.label().to_string(),
            self.variability.label().to_string(),
            self.flow.label().to_string(),
        ]
    }
}
