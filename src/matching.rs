//! Comparing a chord against the melody.

use std::collections::BTreeSet;

use crate::models::pitch_class::PitchClass;
use crate::models::result::ChordMatch;
use crate::resolver::ChordResolver;

/// Resolve a symbol and classify it against the melody.
///
/// Returns `None` when the resolver cannot parse the symbol, or when
/// `strict` filtering is on and a non-empty melody is not fully contained
/// in the chord. `force_include` bypasses the strict filter (used for a
/// minor-sixth family's root chord, which stays visible whenever the melody
/// is diatonic to its scale).
pub fn build_match(
    resolver: &dyn ChordResolver,
    symbol: &str,
    melody: &BTreeSet<PitchClass>,
    strict: bool,
    force_include: bool,
) -> Option<ChordMatch> {
    let chord_notes = resolver.resolve(symbol);
    if chord_notes.is_empty() {
        return None;
    }

    let mut matching_notes = Vec::new();
    let mut missing_notes = Vec::new();
    for &note in melody {
        if chord_notes.contains(&note) {
            matching_notes.push(note);
        } else {
            missing_notes.push(note);
        }
    }

    let is_full_match = melody.is_empty() || missing_notes.is_empty();

    if !force_include && strict && !melody.is_empty() && !is_full_match {
        return None;
    }

    Some(ChordMatch {
        symbol: symbol.to_string(),
        matching_notes,
        missing_notes,
        is_full_match,
        label_suffix: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::IntervalResolver;
    use PitchClass::*;

    fn melody(notes: &[PitchClass]) -> BTreeSet<PitchClass> {
        notes.iter().copied().collect()
    }

    #[test]
    fn test_empty_melody_is_full_match() {
        let m = build_match(&IntervalResolver, "C7", &melody(&[]), false, false).unwrap();
        assert!(m.is_full_match);
        assert!(m.matching_notes.is_empty());
        assert!(m.missing_notes.is_empty());
    }

    #[test]
    fn test_partition_covers_melody() {
        let mel = melody(&[C, Eb, G]);
        let m = build_match(&IntervalResolver, "C7", &mel, false, false).unwrap();
        // C7 = C E G Bb
        assert_eq!(m.matching_notes, vec![C, G]);
        assert_eq!(m.missing_notes, vec![Eb]);
        assert!(!m.is_full_match);

        let union: BTreeSet<PitchClass> = m
            .matching_notes
            .iter()
            .chain(m.missing_notes.iter())
            .copied()
            .collect();
        assert_eq!(union, mel);
    }

    #[test]
    fn test_full_match_iff_no_missing() {
        let m = build_match(&IntervalResolver, "C7", &melody(&[C, E, Bb]), false, false).unwrap();
        assert!(m.is_full_match);
        assert!(m.missing_notes.is_empty());
    }

    #[test]
    fn test_strict_mode_excludes_partial_matches() {
        let mel = melody(&[C, Eb]);
        assert!(build_match(&IntervalResolver, "C7", &mel, true, false).is_none());
        // Cm7 contains both C and Eb.
        assert!(build_match(&IntervalResolver, "Cm7", &mel, true, false).is_some());
    }

    #[test]
    fn test_force_include_bypasses_strict_mode() {
        let mel = melody(&[C, Eb]);
        let m = build_match(&IntervalResolver, "C7", &mel, true, true).unwrap();
        assert!(!m.is_full_match);
        assert_eq!(m.missing_notes, vec![Eb]);
    }

    #[test]
    fn test_unresolvable_symbol_is_excluded() {
        assert!(build_match(&IntervalResolver, "H7", &melody(&[]), false, false).is_none());
        assert!(build_match(&IntervalResolver, "H7", &melody(&[]), false, true).is_none());
    }
}
