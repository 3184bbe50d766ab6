use crate::error::ScoreError;
use crate::instruments::{Instrument, Layout, Registry};
use crate::model::scores::{ScoreResult, SubscaleScore};

/// Scores `responses` (one weight per item, in item order) against `instrument_id`.
pub fn score(
    registry: &Registry,
    instrument_id: &str,
    responses: &[u32],
) -> Result<ScoreResult, ScoreError> {
    let instrument = registry.get_instrument(instrument_id)?;
    score_instrument(instrument, responses)
}

pub fn score_instrument(
    instrument: &Instrument,
    responses: &[u32],
) -> Result<ScoreResult, ScoreError> {
    instrument.validate_responses(responses)?;

    let total: u32 = responses.iter().sum();
    tracing::debug!(
        instrument = instrument.code,
        kind = ?instrument.kind(),
        total,
        "scoring response vector"
    );

    let result = match &instrument.layout {
        Layout::Total(interpretation) => match interpretation.lookup(total) {
            Some(label) => ScoreResult::Simple { total, label },
            None => ScoreResult::Unlabeled { total },
        },
        layout => {
            let sums = subscale_sums(layout, responses);
            let subscales = layout
                .subscales()
                .iter()
                .zip(sums)
                .map(|(subscale, score)| SubscaleScore {
                    name: subscale.name,
                    score,
                    interpretation: subscale.interpretation.lookup(score),
                })
                .collect();
            ScoreResult::Subscaled { subscales }
        }
    };

    Ok(result)
}

/// Partial sums per subscale; empty for simple layouts.
pub fn subscale_sums(layout: &Layout, responses: &[u32]) -> Vec<u32> {
    let mut sums = vec![0u32; layout.subscales().len()];
    for (position, &value) in responses.iter().enumerate() {
        if let Some(idx) = layout.subscale_of(position) {
            sums[idx] += value;
        }
    }
    sums
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/score.rs"]
mod tests;
