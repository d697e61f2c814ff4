// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Conversion of MIDI note numbers to human-readable names.

use serde::{Deserialize, Serialize};

const NOTES_ALPHA_EN: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const NOTES_ALPHA_DE: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "H",
];
const NOTES_SYLLABIC: [&str; 12] = [
    "Do", "Do#", "Re", "Re#", "Mi", "Fa", "Fa#", "Sol", "Sol#", "La", "La#", "Si",
];

/// Naming convention for note display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteNameStyle {
    /// English alphabetical (C, C#, D, ...)
    AlphaEn,
    /// German alphabetical (B is written H)
    AlphaDe,
    /// Syllabic (Do, Re, Mi, ...)
    Syllabic,
}

impl Default for NoteNameStyle {
    fn default() -> Self {
        NoteNameStyle::AlphaEn
    }
}

/// Name of a MIDI note number with its octave, middle C (60) being C4.
///
/// Note numbers are 7-bit; the high bit is ignored.
pub fn note_name(note: u8, style: NoteNameStyle) -> String {
    let note = note & 0x7F;
    let index = (note % 12) as usize;
    let octave = (note / 12) as i8 - 1;
    let name = match style {
        NoteNameStyle::AlphaEn => NOTES_ALPHA_EN[index],
        NoteNameStyle::AlphaDe => NOTES_ALPHA_DE[index],
        NoteNameStyle::Syllabic => NOTES_SYLLABIC[index],
    };
    format!("{}{}", name, octave)
}
