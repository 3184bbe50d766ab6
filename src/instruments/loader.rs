use std::collections::BTreeSet;

use crate::error::RegistryError;
use crate::instruments::defs::{
    BandDef, InstrumentDef, InterpretationDef, LayoutDef, SubscaleDef, builtin_instruments,
};
use crate::instruments::{Instrument, Interpretation, Layout, RangeBand, RangeToken, Registry, Subscale};

pub fn load_registry() -> Result<Registry, RegistryError> {
    let registry = load_from_defs(builtin_instruments())?;
    tracing::debug!(instruments = registry.len(), "instrument registry loaded");
    Ok(registry)
}

/// Validates every definition and parses all range tokens up front.
pub fn load_from_defs(defs: &[InstrumentDef]) -> Result<Registry, RegistryError> {
    let mut seen = BTreeSet::new();
    let mut instruments = Vec::with_capacity(defs.len());

    for def in defs {
        if !seen.insert(def.id) {
            return Err(RegistryError::DuplicateId(def.id.to_string()));
        }
        instruments.push(map_instrument(def)?);
    }

    Ok(Registry::new(instruments))
}

fn map_instrument(def: &InstrumentDef) -> Result<Instrument, RegistryError> {
    if def.items.is_empty() {
        return Err(RegistryError::NoItems(def.id.to_string()));
    }
    if def.options.len() != def.weights.len() || def.weights.is_empty() {
        return Err(RegistryError::WeightsMismatch {
            instrument: def.id.to_string(),
            options: def.options.len(),
            weights: def.weights.len(),
        });
    }

    let layout = match def.layout {
        LayoutDef::Total(bands) => Layout::Total(Interpretation::Banded(map_bands(def.id, bands)?)),
        LayoutDef::Stride(subscales) => {
            if subscales.len() < 2 {
                return Err(invalid_layout(def, "stride layout needs at least two subscales"));
            }
            if subscales.len() > def.items.len() {
                return Err(invalid_layout(def, "more subscales than items"));
            }
            Layout::Stride(map_subscales(def.id, subscales)?)
        }
        LayoutDef::Split {
            boundary,
            subscales,
        } => {
            if subscales.len() != 2 {
                return Err(invalid_layout(def, "split layout needs exactly two subscales"));
            }
            if boundary == 0 || boundary >= def.items.len() {
                return Err(invalid_layout(
                    def,
                    &format!("split boundary {} outside 1..{}", boundary, def.items.len()),
                ));
            }
            Layout::Split {
                boundary,
                subscales: map_subscales(def.id, subscales)?,
            }
        }
    };

    Ok(Instrument {
        id: def.id,
        code: def.code,
        items: def.items,
        options: def.options,
        weights: def.weights,
        layout,
    })
}

fn map_subscales(
    instrument: &str,
    defs: &'static [SubscaleDef],
) -> Result<Vec<Subscale>, RegistryError> {
    let mut out = Vec::with_capacity(defs.len());
    for def in defs {
        let interpretation = match def.interpretation {
            InterpretationDef::Banded(bands) => Interpretation::Banded(map_bands(instrument, bands)?),
            InterpretationDef::Descriptive(sentence) => Interpretation::Descriptive(sentence),
        };
        out.push(Subscale {
            name: def.name,
            interpretation,
        });
    }
    Ok(out)
}

fn map_bands(instrument: &str, bands: &'static [BandDef]) -> Result<Vec<RangeBand>, RegistryError> {
    let mut out = Vec::with_capacity(bands.len());
    for band in bands {
        let token = RangeToken::parse(band.range).map_err(|source| {
            RegistryError::MalformedRange {
                instrument: instrument.to_string(),
                token: band.range.to_string(),
                source,
            }
        })?;
        out.push(RangeBand {
            token,
            label: band.label,
        });
    }
    Ok(out)
}

fn invalid_layout(def: &InstrumentDef, reason: &str) -> RegistryError {
    RegistryError::InvalidLayout {
        instrument: def.id.to_string(),
        reason: reason.to_string(),
    }
}
