//! Barry Harris diminished-sixth scale analyzer.
//!
//! Given a diminished seventh chord (and an optional melody), derives every
//! harmonically related scale, chord family, and substitute chord implied
//! by the diminished-sixth scale system: the dominant families, the related
//! minor-sixth groups with their diatonic derived chords, the two
//! major-sixth families, and the upper-structure triads.
//!
//! The whole pipeline is one synchronous pure function:
//!
//! ```
//! use dimsix::{analyze, Config};
//!
//! let result = analyze("Cdim", "C Eb", &Config::default());
//! assert!(result.error.is_none());
//! assert_eq!(result.display_chord, "C°");
//! ```

pub mod analyze;
pub mod families;
pub mod matching;
pub mod models;
pub mod resolver;
pub mod symbol;

mod consolidate;
mod derive;
mod sort;

// Re-export the commonly used surface
pub use analyze::{analyze, analyze_with_resolver, ERR_NOT_FOUND, ERR_UNSUPPORTED, INFO_EMPTY_INPUT};
pub use models::config::Config;
pub use models::pitch_class::{ParseNoteError, PitchClass};
pub use models::quality::Quality;
pub use models::result::{
    AnalysisResult, ChordMatch, FamilyGroup, RelatedMinorSix, SystemMovement, UpperStructureTriads,
};
pub use models::scale::{NoteRole, ScaleKind, ScaleNote};
pub use resolver::{ChordResolver, IntervalResolver};
