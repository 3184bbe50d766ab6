use serde::Serialize;

#[derive(Debug, Clone)]
pub struct AcousticProfile {
    pub fmin_hz: f64,
    pub fmax_hz: f64,
    /// Base frame geometry in samples; the tracker doubles all three when `sr / fmin_hz`
    /// does not fit between `frame_length` and `win_length`.
    pub frame_length: usize,
    pub hop_length: usize,
    pub win_length: usize,
    pub trough_threshold: f64,
    pub silence_rms: f64,

    /// Upper edges of the first four pitch bands; the fifth is open-ended.
    pub pitch_edges_hz: [f64; 4],
    pub variability_edges_hz: [f64; 2],
    pub voiced_ratio_edges: [f64; 2],

    pub voiced_ratio_basis: VoicedRatioBasis,
}

/// Denominator of the voiced ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoicedRatioBasis {
    /// voiced frames / analysed frames
    Frames,
    /// voiced frames / raw sample count
    Samples,
}

impl AcousticProfile {
    pub fn default_v1() -> Self {
        Self {
            fmin_hz: 50.0,
            fmax_hz: 2000.0,
            frame_length: 2048,
            hop_length: 512,
            win_length: 1024,
            trough_threshold: 0.1,
            silence_rms: 1e-4,
            pitch_edges_hz: [85.0, 165.0, 255.0, 350.0],
            variability_edges_hz: [15.0, 30.0],
            voiced_ratio_edges: [60.0, 80.0],
            voiced_ratio_basis: VoicedRatioBasis::Frames,
        }
    }

    pub fn legacy_v1() -> Self {
        let mut base = Self::default_v1();
        base.voiced_ratio_basis = VoicedRatioBasis::Samples;
        base
    }
}
