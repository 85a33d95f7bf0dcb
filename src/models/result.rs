//! Output structures assembled by the analysis.
//!
//! One `AnalysisResult` is created per call and never mutated afterwards;
//! there is no shared state between calls.

use serde::{Deserialize, Serialize};

use super::pitch_class::PitchClass;
use super::scale::{ScaleKind, ScaleNote};

/// A chord compared against the melody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordMatch {
    pub symbol: String,
    /// Melody pitch classes found in the chord, ascending chromatic order.
    pub matching_notes: Vec<PitchClass>,
    /// Melody pitch classes absent from the chord, ascending chromatic order.
    pub missing_notes: Vec<PitchClass>,
    /// True when the melody is empty or fully contained in the chord.
    pub is_full_match: bool,
    /// Annotation trail left by consolidation and relative-voicing labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_suffix: Option<String>,
}

/// Chords grouped under one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGroup {
    pub root: PitchClass,
    pub chords: Vec<ChordMatch>,
}

/// The "system movement" pair: the current diminished chord and its
/// half-step-lower passing chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMovement {
    pub on: String,
    pub off: String,
}

/// One related minor-sixth group: the root chord, its scale, and the chords
/// derivable from that scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedMinorSix {
    pub chord: ChordMatch,
    pub scale: Vec<ScaleNote>,
    pub derived_chords: Vec<ChordMatch>,
}

/// Upper-structure triads on the family's dominant roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpperStructureTriads {
    pub major: Vec<ChordMatch>,
    pub minor: Vec<ChordMatch>,
}

/// Aggregate result of one analysis call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub display_chord: String,
    pub scale_root: Option<PitchClass>,
    pub scale_kind: Option<ScaleKind>,
    pub scale_notes: Vec<ScaleNote>,
    pub system_movement: Option<SystemMovement>,
    pub melody_analysis: Vec<ScaleNote>,
    /// Dominant-seventh families related to the diminished chord.
    pub families: Vec<FamilyGroup>,
    pub related_minor_sixths: Vec<RelatedMinorSix>,
    pub major6_raise2: Vec<FamilyGroup>,
    pub major6_lower2: Vec<FamilyGroup>,
    pub upper_structure_triads: UpperStructureTriads,
    /// Human-readable rejection message; groupings are empty when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Informational message (e.g. for empty input).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl AnalysisResult {
    /// An empty result carrying only the display string and an error.
    pub(crate) fn rejected(display_chord: String, error: &str) -> Self {
        AnalysisResult {
            display_chord,
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}
