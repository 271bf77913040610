use std::str::FromStr;

use crate::error::BeepError;

/// Oscillator shape for the WAV preview. Square is closest to a piezo buzzer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WaveformType {
    Sine,
    #[default]
    Square,
    Triangle,
    Sawtooth,
    Noise,
}

impl WaveformType {
    pub fn generate_sample(&self, phase: f32) -> f32 { // Phase should be in the range [0.0, 1.0)
        match self {
            WaveformType::Sine => (phase * std::f32::consts::TAU).sin(),
            WaveformType::Square => if phase < 0.5 { 1.0 } else { -1.0 },
            WaveformType::Sawtooth => phase * 2.0 - 1.0,
            WaveformType::Noise => fastrand::f32() * 2.0 - 1.0,
            WaveformType::Triangle => {
                if phase < 0.5 { phase * 4.0 - 1.0 } else { 3.0 - phase * 4.0 }
            }
        }
    }
}

impl FromStr for WaveformType {
    type Err = BeepError;

    fn from_str(s: &str) -> Result<Self, BeepError> {
        match s.trim().to_lowercase().as_str() {
            "sine" => Ok(WaveformType::Sine),
            "square" => Ok(WaveformType::Square),
            "triangle" => Ok(WaveformType::Triangle),
            "sawtooth" | "saw" => Ok(WaveformType::Sawtooth),
            "noise" => Ok(WaveformType::Noise),
            other => Err(BeepError::InvalidPreview(format!("Unknown waveform: {}", other))),
        }
    }
}
