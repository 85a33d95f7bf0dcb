//! The 12-tone chromatic pitch-class model.
//!
//! Every note name the analyzer touches is reduced to one of 12 canonical
//! spellings (flat-preferring, e.g. "Db" rather than "C#"). Enharmonic
//! aliases are folded into the canonical variant at parse time, so the rest
//! of the crate never has to compare spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a string is not a recognizable note name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid note name: '{0}'")]
pub struct ParseNoteError(pub String);

/// One of the 12 chromatic pitch classes, with its canonical spelling.
///
/// Variant order is ascending chromatic order from C, so `PitchClass as u8`
/// is the semitone index 0-11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl PitchClass {
    /// All 12 pitch classes in ascending chromatic order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Db,
        PitchClass::D,
        PitchClass::Eb,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Gb,
        PitchClass::G,
        PitchClass::Ab,
        PitchClass::A,
        PitchClass::Bb,
        PitchClass::B,
    ];

    /// Semitone index relative to C (0-11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for a semitone index, wrapping mod 12.
    pub fn from_index(index: u8) -> PitchClass {
        Self::ALL[(index % 12) as usize]
    }

    /// Canonical spelling of this pitch class.
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Db => "Db",
            PitchClass::D => "D",
            PitchClass::Eb => "Eb",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Gb => "Gb",
            PitchClass::G => "G",
            PitchClass::Ab => "Ab",
            PitchClass::A => "A",
            PitchClass::Bb => "Bb",
            PitchClass::B => "B",
        }
    }

    /// Transpose by a signed number of semitones, wrapping mod 12.
    pub fn transpose(self, semitones: i8) -> PitchClass {
        let idx = (self.index() as i16 + semitones as i16).rem_euclid(12) as usize;
        Self::ALL[idx]
    }

    /// The pitch class one half step below (the passing-chord root).
    pub fn half_step_down(self) -> PitchClass {
        self.transpose(-1)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = ParseNoteError;

    /// Parses a note name, folding the fixed enharmonic alias table
    /// (C#->Db, D#->Eb, F#->Gb, G#->Ab, A#->Bb, E#->F, B#->C) into the
    /// canonical spelling. The first letter is case-insensitive and the
    /// Unicode accidental glyphs are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().replace('♭', "b").replace('♯', "#");
        let mut chars = cleaned.chars();
        let Some(first) = chars.next() else {
            return Err(ParseNoteError(s.to_string()));
        };
        let key: String = first.to_ascii_uppercase().to_string() + chars.as_str();

        let pc = match key.as_str() {
            "C" | "B#" => PitchClass::C,
            "Db" | "C#" => PitchClass::Db,
            "D" => PitchClass::D,
            "Eb" | "D#" => PitchClass::Eb,
            "E" => PitchClass::E,
            "F" | "E#" => PitchClass::F,
            "Gb" | "F#" => PitchClass::Gb,
            "G" => PitchClass::G,
            "Ab" | "G#" => PitchClass::Ab,
            "A" => PitchClass::A,
            "Bb" | "A#" => PitchClass::Bb,
            "B" => PitchClass::B,
            _ => return Err(ParseNoteError(s.to_string())),
        };
        Ok(pc)
    }
}
