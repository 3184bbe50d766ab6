pub mod defs;
pub mod loader;
pub mod range;

pub use range::RangeToken;

use crate::error::ScoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeBand {
    pub token: RangeToken,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpretation {
    /// Ordered bands; first match wins.
    Banded(Vec<RangeBand>),
    /// Fixed sentence reported regardless of score.
    Descriptive(&'static str),
}

impl Interpretation {
    pub fn lookup(&self, score: u32) -> Option<&'static str> {
        match self {
            Interpretation::Banded(bands) => bands
                .iter()
                .find(|band| band.token.contains(score))
                .map(|band| band.label),
            Interpretation::Descriptive(sentence) => Some(*sentence),
        }
    }

    pub fn bands(&self) -> &[RangeBand] {
        match self {
            Interpretation::Banded(bands) => bands,
            Interpretation::Descriptive(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscale {
    pub name: &'static str,
    pub interpretation: Interpretation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Total(Interpretation),
    Stride(Vec<Subscale>),
    Split {
        boundary: usize,
        subscales: Vec<Subscale>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Simple,
    CompositeStride,
    CompositeSplit,
}

impl Layout {
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Layout::Total(_) => InstrumentKind::Simple,
            Layout::Stride(_) => InstrumentKind::CompositeStride,
            Layout::Split { .. } => InstrumentKind::CompositeSplit,
        }
    }

    /// Subscale index owning the item at `position`, `None` for simple layouts.
    pub fn subscale_of(&self, position: usize) -> Option<usize> {
        match self {
            Layout::Total(_) => None,
            Layout::Stride(subscales) => Some(position % subscales.len()),
            Layout::Split { boundary, .. } => Some(if position < *boundary { 0 } else { 1 }),
        }
    }

    pub fn subscales(&self) -> &[Subscale] {
        match self {
            Layout::Total(_) => &[],
            Layout::Stride(subscales) => subscales,
            Layout::Split { subscales, .. } => subscales,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Instrument {
    pub id: &'static str,
    pub code: &'static str,
    pub items: &'static [&'static str],
    pub options: &'static [&'static str],
    pub weights: &'static [u32],
    pub layout: Layout,
}

impl Instrument {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn kind(&self) -> InstrumentKind {
        self.layout.kind()
    }

    pub fn min_weight(&self) -> u32 {
        self.weights.iter().copied().min().unwrap_or(0)
    }

    pub fn max_weight(&self) -> u32 {
        self.weights.iter().copied().max().unwrap_or(0)
    }

    pub fn max_score(&self) -> u32 {
        self.max_weight() * self.items.len() as u32
    }

    pub fn min_score(&self) -> u32 {
        self.min_weight() * self.items.len() as u32
    }

    /// Checks length and weight membership of a response vector.
    pub fn validate_responses(&self, responses: &[u32]) -> Result<(), ScoreError> {
        if responses.len() != self.items.len() {
            return Err(self.invalid(format!(
                "expected {} responses, got {}",
                self.items.len(),
                responses.len()
            )));
        }
        for (position, value) in responses.iter().enumerate() {
            if !self.weights.contains(value) {
                return Err(self.invalid(format!(
                    "item {} has weight {} outside {:?}",
                    position + 1,
                    value,
                    self.weights
                )));
            }
        }
        Ok(())
    }

    /// Maps chosen option positions, one per item, to their weights.
    pub fn weights_for_choices(&self, choices: &[usize]) -> Result<Vec<u32>, ScoreError> {
        if choices.len() != self.items.len() {
            return Err(self.invalid(format!(
                "expected {} choices, got {}",
                self.items.len(),
                choices.len()
            )));
        }
        let mut out = Vec::with_capacity(choices.len());
        for (position, &choice) in choices.iter().enumerate() {
            match self.weights.get(choice) {
                Some(weight) => out.push(*weight),
                None => {
                    return Err(self.invalid(format!(
                        "item {} chose option {} of {}",
                        position + 1,
                        choice,
                        self.options.len()
                    )));
                }
            }
        }
        Ok(out)
    }

    fn invalid(&self, reason: String) -> ScoreError {
        ScoreError::InvalidResponse {
            instrument: self.id.to_string(),
            reason,
        }
    }
}

/// Read-only instrument catalog, built once by [`loader::load_registry`].
#[derive(Debug, Clone)]
pub struct Registry {
    instruments: Vec<Instrument>,
}

impl Registry {
    pub(crate) fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    /// Instrument ids in insertion order.
    pub fn list_instruments(&self) -> Vec<&'static str> {
        self.iter().map(|i| i.id).collect()
    }

    pub fn get_instrument(&self, id: &str) -> Result<&Instrument, ScoreError> {
        self.iter()
            .find(|i| i.id == id)
            .ok_or_else(|| ScoreError::NotFound(id.to_string()))
    }

    /// Resolves a full id or a short code, ignoring ASCII case.
    pub fn find(&self, query: &str) -> Result<&Instrument, ScoreError> {
        let query = query.trim();
        if let Ok(found) = self.get_instrument(query) {
            return Ok(found);
        }
        self.iter()
            .find(|i| i.id.eq_ignore_ascii_case(query) || i.code.eq_ignore_ascii_case(query))
            .ok_or_else(|| ScoreError::NotFound(query.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instrument> {
        self.instruments.iter()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/instruments/tests.rs"]
mod tests;
