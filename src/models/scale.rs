//! The Barry Harris 8-note scale model.
//!
//! Every scale kind is a fixed pattern of 8 semitone offsets from the root.
//! The even/odd alternation of scale degrees is load-bearing: even degrees
//! are the four chord tones, odd degrees are the four borrowed (diminished
//! passing) tones. That symmetry is what ties the scale back to its
//! diminished chord and must not be parameterized away.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::pitch_class::PitchClass;

/// The named 8-note scale kinds, each with a fixed interval pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    /// Whole-half octatonic scale built on a diminished chord.
    #[serde(rename = "DiminishedScale")]
    Diminished,
    /// Major 6 diminished scale.
    #[serde(rename = "Major6Dim")]
    Major6Diminished,
    /// Minor 6 diminished scale.
    #[serde(rename = "Minor6Dim")]
    Minor6Diminished,
    /// Dominant 7 diminished scale.
    #[serde(rename = "Dominant7Dim")]
    Dominant7Diminished,
    /// Dominant 7 flat 5 diminished scale.
    #[serde(rename = "Dominant7b5Dim")]
    Dominant7Flat5Diminished,
}

impl ScaleKind {
    /// The 8 semitone offsets from the root, in ascending scale order.
    pub fn intervals(self) -> [u8; 8] {
        match self {
            ScaleKind::Diminished => [0, 2, 3, 5, 6, 8, 9, 11],
            ScaleKind::Major6Diminished => [0, 2, 4, 5, 7, 8, 9, 11],
            ScaleKind::Minor6Diminished => [0, 2, 3, 5, 7, 8, 9, 11],
            ScaleKind::Dominant7Diminished => [0, 2, 4, 5, 7, 8, 10, 11],
            ScaleKind::Dominant7Flat5Diminished => [0, 2, 4, 6, 7, 8, 10, 11],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleKind::Diminished => "DiminishedScale",
            ScaleKind::Major6Diminished => "Major6Dim",
            ScaleKind::Minor6Diminished => "Minor6Dim",
            ScaleKind::Dominant7Diminished => "Dominant7Dim",
            ScaleKind::Dominant7Flat5Diminished => "Dominant7b5Dim",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Harmonic role of a note relative to a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteRole {
    #[serde(rename = "Chord Tone")]
    ChordTone,
    #[serde(rename = "Borrowed Tone")]
    BorrowedTone,
    #[serde(rename = "Not in scale")]
    NotInScale,
}

impl NoteRole {
    pub fn as_str(self) -> &'static str {
        match self {
            NoteRole::ChordTone => "Chord Tone",
            NoteRole::BorrowedTone => "Borrowed Tone",
            NoteRole::NotInScale => "Not in scale",
        }
    }
}

impl fmt::Display for NoteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One displayed scale degree (or appended melody note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleNote {
    pub note: PitchClass,
    pub role: NoteRole,
    #[serde(rename = "isMelody")]
    pub is_melody: bool,
}

/// Generate the 8 pitch classes of a scale from its root.
pub fn scale_pitch_classes(root: PitchClass, kind: ScaleKind) -> [PitchClass; 8] {
    kind.intervals().map(|offset| root.transpose(offset as i8))
}

/// Role of a scale degree: even degrees are chord tones, odd degrees are
/// borrowed tones.
pub fn role_for_degree(degree: usize) -> NoteRole {
    if degree % 2 == 0 {
        NoteRole::ChordTone
    } else {
        NoteRole::BorrowedTone
    }
}
