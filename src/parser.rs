//! Note string parser.
//!
//! Turns strings like `"^A B-C  D#"` into [`NoteEvent`]s. Letters A-G are notes,
//! `^` before or `#` after a letter makes it sharp, `-` right after a letter
//! removes its pause, and every space before the next letter adds 0.05 s.

use serde::Serialize;
use tracing::debug;

use crate::tones::{base_frequency, sharpen};

pub const SHARP_PREFIX: char = '^';
pub const SHARP_SUFFIX: char = '#';
pub const PAUSE_MARKER: char = '-';

/// Pause every note gets, in seconds.
pub const BASE_PAUSE: f64 = 0.05;
/// Extra pause per space between two letters, in seconds.
pub const PAUSE_PER_SPACE: f64 = 0.05;

/// One tone for the playback device: play `frequency` Hz, then wait `pause` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteEvent(pub u32, pub f64);

impl NoteEvent {
    pub fn frequency(&self) -> u32 {
        self.0
    }

    pub fn pause(&self) -> f64 {
        self.1
    }
}

/// Parsed notes in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NoteSequence(Vec<NoteEvent>);

impl NoteSequence {
    pub fn parse(notes: &str) -> Self {
        NoteSequence(parse(notes))
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all pauses, in seconds.
    pub fn total_pause(&self) -> f64 {
        round2(self.0.iter().map(NoteEvent::pause).sum())
    }
}

impl<'a> IntoIterator for &'a NoteSequence {
    type Item = &'a NoteEvent;
    type IntoIter = std::slice::Iter<'a, NoteEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Letters in the sense of the note scanner: Unicode letters, but not letter-like
/// numerals such as `Ⅻ`.
fn is_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// True if the letter at `index` has a `^` right before it or a `#` right after it.
pub fn is_sharp(notes: &[char], index: usize) -> bool {
    let caret_before = index > 0 && notes.get(index - 1) == Some(&SHARP_PREFIX);
    let hash_after = notes.get(index + 1) == Some(&SHARP_SUFFIX);
    caret_before || hash_after
}

/// Counts the plain spaces between the letter at `index` and the next alphabetic
/// character. Zero when nothing alphabetic follows.
pub fn count_spaces(notes: &[char], index: usize) -> usize {
    let rest = notes.get(index + 1..).unwrap_or_default();
    match rest.iter().position(|&c| is_letter(c)) {
        Some(next) => rest[..next].iter().filter(|&&c| c == ' ').count(),
        None => 0,
    }
}

/// Converts a note string into (frequency, pause) pairs. Never fails; anything
/// that is not a note letter is skipped.
pub fn parse(notes: &str) -> Vec<NoteEvent> {
    let chars: Vec<char> = notes.chars().collect();
    let mut events = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        if !is_letter(c) {
            continue;
        }
        let Some(base) = base_frequency(c) else {
            continue; // H, Z, lowercase...
        };

        let frequency = if is_sharp(&chars, i) { sharpen(base) } else { base };

        let pause = if chars.get(i + 1) == Some(&PAUSE_MARKER) {
            0.0
        } else {
            round2(BASE_PAUSE + count_spaces(&chars, i) as f64 * PAUSE_PER_SPACE)
        };

        events.push(NoteEvent(frequency, pause));
    }

    debug!(input = notes, notes = events.len(), "parsed note string");
    events
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
