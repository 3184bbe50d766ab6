use serde::Serialize;

pub const NO_INTERPRETATION: &str = "No interpretation available";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscaleScore {
    pub name: &'static str,
    pub score: u32,
    pub interpretation: Option<&'static str>,
}

impl SubscaleScore {
    pub fn label(&self) -> &'static str {
        self.interpretation.unwrap_or(NO_INTERPRETATION)
    }
}

/// Outcome of scoring one response vector. Callers match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreResult {
    Simple {
        total: u32,
        label: &'static str,
    },
    Subscaled {
        subscales: Vec<SubscaleScore>,
    },
    /// Total matched no band of the instrument's table.
    Unlabeled {
        total: u32,
    },
}

impl ScoreResult {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreResult::Simple { label, .. } => label,
            ScoreResult::Subscaled { .. } => "",
            ScoreResult::Unlabeled { .. } => NO_INTERPRETATION,
        }
    }
}
