//! YIN fundamental-frequency tracking.
//!
//! Frames are not centred: frame `i` covers samples `[i * hop, i * hop + frame_length)` and
//! only frames lying fully inside the signal are analysed. Each frame yields either an
//! estimate in `[fmin, fmax]` or `0.0` for unvoiced/silent frames.
//!
//! Frame, window and hop come from the profile and are doubled at high sample rates so that
//! a period of `1 / fmin` always fits in the lag range.

use crate::model::thresholds::AcousticProfile;

#[derive(Debug, Clone, PartialEq)]
pub struct PitchTrack {
    /// Per-frame estimate in Hz, `0.0` where no pitch was found.
    pub f0_hz: Vec<f64>,
}

impl PitchTrack {
    pub fn total_frames(&self) -> usize {
        self.f0_hz.len()
    }

    pub fn voiced(&self) -> Vec<f64> {
        self.f0_hz.iter().copied().filter(|&f| f > 0.0).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct LagRange {
    tau_min: usize,
    tau_max: usize,
}

/// Frame, window and hop in samples for one sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameGeometry {
    frame_length: usize,
    win_length: usize,
    hop_length: usize,
}

const MAX_FRAME_SCALE: usize = 64;

pub fn track_pitch(signal: &[f32], sample_rate: u32, profile: &AcousticProfile) -> PitchTrack {
    let FrameGeometry {
        frame_length,
        win_length: win,
        hop_length: hop,
    } = frame_geometry(sample_rate, profile);

    let Some(lags) = lag_range(sample_rate, frame_length, win, profile) else {
        return PitchTrack { f0_hz: Vec::new() };
    };
    if signal.len() < frame_length {
        return PitchTrack { f0_hz: Vec::new() };
    }
    tracing::debug!(
        sample_rate,
        frame_length,
        win,
        hop,
        tau_max = lags.tau_max,
        "pitch frame geometry"
    );

    let n_frames = (signal.len() - frame_length) / hop + 1;
    let mut f0_hz = Vec::with_capacity(n_frames);
    let mut cmnd = vec![0.0f64; lags.tau_max + 1];

    for frame_idx in 0..n_frames {
        let start = frame_idx * hop;
        let frame = &signal[start..start + frame_length];
        f0_hz.push(estimate_frame(frame, sample_rate as f64, win, lags, profile, &mut cmnd));
    }

    PitchTrack { f0_hz }
}

/// Profile geometry, doubled until the longest period `sr / fmin` fits inside the lag range.
fn frame_geometry(sample_rate: u32, profile: &AcousticProfile) -> FrameGeometry {
    let frame_length = profile.frame_length;
    let win_length = profile.win_length.min(frame_length);
    let hop_length = profile.hop_length.max(1);

    let longest_period = if profile.fmin_hz > 0.0 {
        (sample_rate as f64 / profile.fmin_hz).ceil() as usize
    } else {
        0
    };

    let mut scale = 1;
    while scale < MAX_FRAME_SCALE
        && (frame_length * scale).saturating_sub(win_length * scale + 1) < longest_period
    {
        scale *= 2;
    }

    FrameGeometry {
        frame_length: frame_length * scale,
        win_length: win_length * scale,
        hop_length: hop_length * scale,
    }
}

fn lag_range(
    sample_rate: u32,
    frame_length: usize,
    win: usize,
    profile: &AcousticProfile,
) -> Option<LagRange> {
    if sample_rate == 0 || profile.fmin_hz <= 0.0 || profile.fmax_hz <= profile.fmin_hz {
        return None;
    }
    let sr = sample_rate as f64;
    let tau_min = ((sr / profile.fmax_hz).floor() as usize).max(1);
    let lag_limit = frame_length.checked_sub(win + 1)?;
    let tau_max = ((sr / profile.fmin_hz).ceil() as usize).min(lag_limit);
    if tau_min + 1 >= tau_max {
        return None;
    }
    Some(LagRange { tau_min, tau_max })
}

fn estimate_frame(
    frame: &[f32],
    sr: f64,
    win: usize,
    lags: LagRange,
    profile: &AcousticProfile,
    cmnd: &mut [f64],
) -> f64 {
    if frame.iter().any(|s| !s.is_finite()) {
        return 0.0;
    }
    let energy: f64 = frame.iter().map(|&s| (s as f64) * (s as f64)).sum();
    let rms = (energy / frame.len() as f64).sqrt();
    if rms < profile.silence_rms {
        return 0.0;
    }

    difference(frame, win, lags.tau_max, cmnd);
    normalize_cumulative_mean(cmnd);

    let Some(tau) = first_trough(cmnd, lags, profile.trough_threshold) else {
        return 0.0;
    };
    let period = refine_parabolic(cmnd, tau, lags.tau_max);
    if period <= 0.0 {
        return 0.0;
    }

    let f0 = sr / period;
    if f0 < profile.fmin_hz || f0 > profile.fmax_hz {
        0.0
    } else {
        f0
    }
}

fn difference(frame: &[f32], win: usize, tau_max: usize, out: &mut [f64]) {
    out[0] = 0.0;
    for tau in 1..=tau_max {
        let mut acc = 0.0f64;
        for j in 0..win {
            let delta = frame[j] as f64 - frame[j + tau] as f64;
            acc += delta * delta;
        }
        out[tau] = acc;
    }
}

fn normalize_cumulative_mean(d: &mut [f64]) {
    let mut running = 0.0f64;
    d[0] = 1.0;
    for tau in 1..d.len() {
        running += d[tau];
        d[tau] = if running > 0.0 {
            d[tau] * tau as f64 / running
        } else {
            1.0
        };
    }
}

/// First lag dipping under `threshold`, advanced to the bottom of its trough.
fn first_trough(cmnd: &[f64], lags: LagRange, threshold: f64) -> Option<usize> {
    let mut tau = lags.tau_min;
    while tau <= lags.tau_max {
        if cmnd[tau] < threshold {
            while tau < lags.tau_max && cmnd[tau + 1] < cmnd[tau] {
                tau += 1;
            }
            return Some(tau);
        }
        tau += 1;
    }
    None
}

fn refine_parabolic(cmnd: &[f64], tau: usize, tau_max: usize) -> f64 {
    if tau == 0 || tau >= tau_max {
        return tau as f64;
    }
    let s0 = cmnd[tau - 1];
    let s1 = cmnd[tau];
    let s2 = cmnd[tau + 1];
    let denom = s0 - 2.0 * s1 + s2;
    if denom.abs() < f64::EPSILON {
        return tau as f64;
    }
    let shift = (0.5 * (s0 - s2) / denom).clamp(-1.0, 1.0);
    tau as f64 + shift
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/pitch.rs"]
mod tests;
