use serde::Serialize;
use thiserror::Error;

use crate::model::signals::{PaletteColor, palette};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour {0:?} (expected 6 hex digits, optional leading '#')")]
    InvalidHex(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorMood {
    pub input: String,
    pub nearest: &'static str,
    pub mood: &'static str,
    pub distance: f64,
}

pub fn parse_hex(hex: &str) -> Result<[u8; 3], ColorError> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| ColorError::InvalidHex(hex.to_string()))?;
    }
    Ok(rgb)
}

/// Euclidean-nearest palette entry; on equal distance the earlier entry wins.
pub fn nearest_color(rgb: [u8; 3]) -> (&'static PaletteColor, f64) {
    let mut best = &palette()[0];
    let mut best_sq = squared_distance(rgb, best.rgb);
    for entry in &palette()[1..] {
        let d = squared_distance(rgb, entry.rgb);
        if d < best_sq {
            best = entry;
            best_sq = d;
        }
    }
    (best, (best_sq as f64).sqrt())
}

pub fn color_mood(hex: &str) -> Result<ColorMood, ColorError> {
    let rgb = parse_hex(hex)?;
    let (entry, distance) = nearest_color(rgb);
    Ok(ColorMood {
        input: hex.trim().to_string(),
        nearest: entry.name,
        mood: entry.mood,
        distance,
    })
}

fn squared_distance(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/color.rs"]
mod tests;
