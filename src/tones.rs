//! Base frequencies for the natural notes A-G.

/// Frequency ratio of one equal-tempered semitone, 2^(1/12).
pub const SEMITONE: f64 = 1.059_463_094_359_295_3;

pub const A: u32 = 440;
pub const B: u32 = 493;
pub const C: u32 = 523;
pub const D: u32 = 587;
pub const E: u32 = 659;
pub const F: u32 = 698;
pub const G: u32 = 784;

/// Letters in the tone table, in table order.
pub const LETTERS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

/// Looks up the base frequency of a note letter. Uppercase only.
pub fn base_frequency(letter: char) -> Option<u32> {
    match letter {
        'A' => Some(A),
        'B' => Some(B),
        'C' => Some(C),
        'D' => Some(D),
        'E' => Some(E),
        'F' => Some(F),
        'G' => Some(G),
        _ => None,
    }
}

/// Raises a frequency by one semitone, rounded to the nearest Hz (ties to even).
pub fn sharpen(frequency: u32) -> u32 {
    (frequency as f64 * SEMITONE).round_ties_even() as u32
}
