//! Data models for the diminished-sixth analyzer.

pub mod config;
pub mod pitch_class;
pub mod quality;
pub mod result;
pub mod scale;

// Re-export commonly used types
pub use config::Config;
pub use pitch_class::{ParseNoteError, PitchClass};
pub use quality::Quality;
pub use result::{
    AnalysisResult, ChordMatch, FamilyGroup, RelatedMinorSix, SystemMovement, UpperStructureTriads,
};
pub use scale::{NoteRole, ScaleKind, ScaleNote};
