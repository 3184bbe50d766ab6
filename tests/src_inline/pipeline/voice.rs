use super::*;

const SR: u32 = 16_000;

fn tone(freq: f64, samples: usize, offset: usize) -> impl Iterator<Item = f32> {
    (offset..offset + samples)
        .map(move |i| (0.5 * (2.0 * std::f64::consts::PI * freq * i as f64 / SR as f64).sin()) as f32)
}

fn sine(freq: f64, seconds: f64) -> Vec<f32> {
    tone(freq, (SR as f64 * seconds) as usize, 0).collect()
}

fn profile_of(analysis: VoiceAnalysis) -> PitchProfile {
    match analysis {
        VoiceAnalysis::Profile(p) => p,
        VoiceAnalysis::NoSpeechDetected => panic!("expected a pitch profile"),
    }
}

#[test]
fn test_steady_sine_profile() {
    let profile = AcousticProfile::default_v1();
    let result = profile_of(analyze_voice(&sine(150.0, 2.0), SR, &profile).unwrap());

    assert!((result.mean_pitch_hz - 150.0).abs() < 1.0);
    assert!(result.pitch_std_hz < 1.0);
    assert_eq!(result.voiced_ratio_percent, 100.0);
    assert_eq!(result.voiced_ratio_basis, VoicedRatioBasis::Frames);
    assert_eq!(result.voiced_frames, result.total_frames);
    assert_eq!(
        result.indicators,
        Indicators {
            pitch: PitchBand::Moderate,
            variability: VariabilityBand::Monotone,
            flow: FlowBand::RapidSpeech,
        }
    );
    assert_eq!(
        result.interpretation,
        vec![
            "moderate pitch (typical for calm, relaxed speech)".to_string(),
            "monotonous speech (possibly indicating depression or fatigue)".to_string(),
            "rapid speech (may suggest excitement or stress)".to_string(),
        ]
    );
}

#[test]
fn test_pitch_bands_follow_mean() {
    let profile = AcousticProfile::default_v1();
    let low = profile_of(analyze_voice(&sine(70.0, 1.0), SR, &profile).unwrap());
    assert_eq!(low.indicators.pitch, PitchBand::Low);

    let elevated = profile_of(analyze_voice(&sine(200.0, 1.0), SR, &profile).unwrap());
    assert_eq!(elevated.indicators.pitch, PitchBand::Elevated);

    let very_high = profile_of(analyze_voice(&sine(400.0, 1.0), SR, &profile).unwrap());
    assert_eq!(very_high.indicators.pitch, PitchBand::VeryHigh);
}

#[test]
fn test_two_tones_give_high_variability() {
    let profile = AcousticProfile::default_v1();
    let half = SR as usize;
    let signal = tone(120.0, half, 0).chain(tone(200.0, half, 0)).collect::<Vec<_>>();
    let result = profile_of(analyze_voice(&signal, SR, &profile).unwrap());
    assert!(result.pitch_std_hz >= 30.0, "std {}", result.pitch_std_hz);
    assert_eq!(result.indicators.variability, VariabilityBand::High);
}

#[test]
fn test_silence_means_no_speech() {
    let profile = AcousticProfile::default_v1();
    assert_eq!(
        analyze_voice(&vec![0.0; SR as usize], SR, &profile).unwrap(),
        VoiceAnalysis::NoSpeechDetected
    );
    assert_eq!(
        analyze_voice(&[], SR, &profile).unwrap(),
        VoiceAnalysis::NoSpeechDetected
    );
    assert!(VoiceAnalysis::NoSpeechDetected.profile().is_none());
}

#[test]
fn test_zero_sample_rate_rejected() {
    let profile = AcousticProfile::default_v1();
    assert_eq!(
        analyze_voice(&sine(150.0, 1.0), 0, &profile).unwrap_err(),
        AcousticError::InvalidSampleRate(0)
    );
}

#[test]
fn test_half_silent_recording_has_frequent_pauses() {
    let profile = AcousticProfile::default_v1();
    let mut signal = sine(150.0, 1.0);
    signal.extend(std::iter::repeat_n(0.0f32, 2 * SR as usize));
    let result = profile_of(analyze_voice(&signal, SR, &profile).unwrap());
    assert!(result.voiced_ratio_percent < 60.0);
    assert_eq!(result.indicators.flow, FlowBand::FrequentPauses);
}

#[test]
fn test_legacy_basis_divides_by_samples() {
    let profile = AcousticProfile::legacy_v1();
    let signal = sine(150.0, 2.0);
    let result = profile_of(analyze_voice(&signal, SR, &profile).unwrap());
    let expected = result.voiced_frames as f64 / signal.len() as f64 * 100.0;
    assert_eq!(result.voiced_ratio_percent, round1(expected));
    assert_eq!(result.voiced_ratio_basis, VoicedRatioBasis::Samples);
    assert_eq!(result.indicators.flow, FlowBand::FrequentPauses);
}

#[test]
fn test_profile_serializes_with_kind_tag() {
    let profile = AcousticProfile::default_v1();
    let analysis = analyze_voice(&sine(150.0, 1.0), SR, &profile).unwrap();
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["kind"], "profile");
    assert_eq!(json["voiced_ratio_basis"], "frames");
    assert_eq!(json["indicators"]["pitch"], "moderate");

    let none = serde_json::to_value(VoiceAnalysis::NoSpeechDetected).unwrap();
    assert_eq!(none["kind"], "no_speech_detected");
}

#[test]
fn test_low_voice_at_96khz_is_low_pitch() {
    let profile = AcousticProfile::default_v1();
    let rate = 96_000u32;
    let signal = (0..rate as usize)
        .map(|i| (0.5 * (2.0 * std::f64::consts::PI * 70.0 * i as f64 / rate as f64).sin()) as f32)
        .collect::<Vec<_>>();
    let result = profile_of(analyze_voice(&signal, rate, &profile).unwrap());
    assert!((result.mean_pitch_hz - 70.0).abs() < 1.0);
    assert_eq!(result.indicators.pitch, PitchBand::Low);
    assert_eq!(result.indicators.flow, FlowBand::RapidSpeech);
}
