//! Offline WAV preview of a note sequence, roughly how a buzzer would sound it.

use std::io::Cursor;
use std::path::Path;

use tracing::info;

use crate::error::{BeepError, Result};
use crate::parser::NoteEvent;
use crate::waveform::WaveformType;

pub const MAX_SAMPLE_RATE: u32 = 192_000;
/// Longest single tone, in seconds.
pub const MAX_TONE_LENGTH: f32 = 10.0;
/// Longest whole preview, in seconds.
pub const MAX_PREVIEW_SECONDS: usize = 600;

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub sample_rate: u32,
    /// How long each tone sounds before its pause, in seconds.
    pub tone_length: f32,
    /// 0.0 - 1.0
    pub volume: f32,
    pub waveform: WaveformType,
    pub attack: f32,
    pub release: f32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        PreviewOptions {
            sample_rate: 44100,
            tone_length: 0.2,
            volume: 0.5,
            waveform: WaveformType::default(),
            attack: 0.005,
            release: 0.02,
        }
    }
}

impl PreviewOptions {
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_tone_length(mut self, seconds: f32) -> Self {
        self.tone_length = seconds;
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_waveform(mut self, waveform: WaveformType) -> Self {
        self.waveform = waveform;
        self
    }

    pub fn with_attack(mut self, seconds: f32) -> Self {
        self.attack = seconds;
        self
    }

    pub fn with_release(mut self, seconds: f32) -> Self {
        self.release = seconds;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(BeepError::InvalidPreview(format!("sample rate must be within 1-{} Hz, got {}", MAX_SAMPLE_RATE, self.sample_rate)));
        }
        if !(self.tone_length > 0.0 && self.tone_length <= MAX_TONE_LENGTH) {
            return Err(BeepError::InvalidPreview(format!("tone length must be within 0-{} s, got {}", MAX_TONE_LENGTH, self.tone_length)));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(BeepError::InvalidPreview(format!("volume must be within 0.0-1.0, got {}", self.volume)));
        }
        if !(self.attack >= 0.0 && self.attack.is_finite() && self.release >= 0.0 && self.release.is_finite()) {
            return Err(BeepError::InvalidPreview("attack and release must be finite and non-negative".to_string()));
        }
        Ok(())
    }
}

/// Mono samples in [-1.0, 1.0]: each tone for `tone_length`, then silence for its pause.
pub fn synthesize(events: &[NoteEvent], options: &PreviewOptions) -> Result<Vec<f32>> {
    options.validate()?;

    let sample_rate = options.sample_rate as f32;
    let tone_samples = (options.tone_length * sample_rate) as usize;
    let limit = options.sample_rate as usize * MAX_PREVIEW_SECONDS;
    let total = events
        .iter()
        .try_fold(0usize, |acc, e| acc.checked_add(tone_samples)?.checked_add(pause_samples(e, sample_rate)))
        .filter(|&n| n <= limit)
        .ok_or_else(|| BeepError::InvalidPreview(format!("preview would be longer than {} s", MAX_PREVIEW_SECONDS)))?;

    let mut buffer = Vec::with_capacity(total);
    for event in events {
        let mut phase = 0.0f32;
        for i in 0..tone_samples {
            let time_in_note = i as f32 / sample_rate;
            let envelope = envelope(time_in_note, options.tone_length, options);
            buffer.push(options.waveform.generate_sample(phase) * envelope * options.volume);

            phase += event.frequency() as f32 / sample_rate;
            if phase >= 1.0 {
                phase -= 1.0;
            }
        }
        buffer.resize(buffer.len() + pause_samples(event, sample_rate), 0.0); // Silence for the pause
    }

    Ok(buffer)
}

/// 16-bit mono WAV bytes of the preview.
pub fn to_wav_bytes(events: &[NoteEvent], options: &PreviewOptions) -> Result<Vec<u8>> {
    let samples = synthesize(events, options)?;
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: options.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for sample in samples {
            let int_sample = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
            writer.write_sample(int_sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

pub fn render_wav(events: &[NoteEvent], options: &PreviewOptions, path: &Path) -> Result<()> {
    let bytes = to_wav_bytes(events, options)?;
    std::fs::write(path, &bytes)?;
    info!(path = %path.display(), notes = events.len(), "wrote WAV preview");
    Ok(())
}

fn pause_samples(event: &NoteEvent, sample_rate: f32) -> usize {
    (event.pause() as f32 * sample_rate).round() as usize
}

// Linear attack and release so tones don't click
fn envelope(time: f32, duration: f32, options: &PreviewOptions) -> f32 {
    let release_start = duration - options.release;

    if time < options.attack {
        time / options.attack
    } else if time >= release_start && options.release > 0.0 {
        ((duration - time) / options.release).max(0.0)
    } else {
        1.0
    }
}
