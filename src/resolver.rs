//! The chord-resolution seam.
//!
//! The analysis only needs one capability from a resolver: turn a chord
//! symbol into its pitch-class set. The contract is total; a symbol the
//! resolver cannot make sense of yields the empty set, which downstream
//! code treats as "chord excluded", never as an error.

use std::collections::BTreeSet;

use crate::models::pitch_class::PitchClass;
use crate::symbol::parse_chord;

/// Resolves a chord symbol to its pitch-class set.
///
/// Implementations must be total and side-effect free. An empty set is the
/// valid "cannot parse" result.
pub trait ChordResolver {
    fn resolve(&self, symbol: &str) -> BTreeSet<PitchClass>;
}

/// The built-in resolver: parses root + quality by suffix table and expands
/// the quality's fixed intervals. A slash bass is unioned into the set.
///
/// Covers exactly the symbol shapes the candidate generators emit; anything
/// else resolves to the empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalResolver;

impl ChordResolver for IntervalResolver {
    fn resolve(&self, symbol: &str) -> BTreeSet<PitchClass> {
        let Some(parsed) = parse_chord(symbol) else {
            return BTreeSet::new();
        };
        let mut notes: BTreeSet<PitchClass> = parsed
            .quality
            .intervals()
            .iter()
            .map(|&offset| parsed.root.transpose(offset as i8))
            .collect();
        if let Some(bass) = parsed.bass {
            notes.insert(bass);
        }
        notes
    }
}
