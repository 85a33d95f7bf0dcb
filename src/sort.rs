//! Musical-function ordering of derived chords.
//!
//! The order is a presentation contract: sixth chords lead, followed by the
//! seventh families, then the suspended and augmented colors, with plain
//! triads last. Slash chords sort immediately after their base quality.
//! Ties break by ascending root pitch class, so the result depends only on
//! symbol content, never on insertion order.

use crate::derive::DerivedChord;
use crate::models::quality::Quality;

/// Weight table; lower sorts earlier.
fn quality_weight(quality: Quality) -> u32 {
    match quality {
        Quality::Major6 => 10,
        Quality::Minor6 => 20,
        Quality::MinorMajor7 => 25,
        Quality::DiminishedTriad => 30,
        Quality::Major7 => 40,
        Quality::Dominant9 => 45,
        Quality::Dominant7 => 50,
        Quality::Minor7 => 60,
        Quality::Minor7Flat5 => 70,
        Quality::Dominant7Sus4 => 100,
        Quality::Sus4 => 110,
        Quality::Sus2 => 120,
        Quality::Dominant7Sharp5 => 200,
        Quality::Augmented => 210,
        Quality::Major => 900,
        Quality::Minor => 910,
        _ => 1000,
    }
}

fn sort_key(chord: &DerivedChord) -> (u32, u8) {
    let mut weight = quality_weight(chord.quality);
    if chord.bass.is_some() {
        weight += 1;
    }
    (weight, chord.root.index())
}

/// Sort derived chords by quality weight, then root.
pub(crate) fn sort_derived(chords: &mut [DerivedChord]) {
    chords.sort_by_key(sort_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::build_match;
    use crate::resolver::IntervalResolver;
    use crate::symbol::parse_chord;
    use std::collections::BTreeSet;

    fn derived(symbol: &str) -> DerivedChord {
        let parsed = parse_chord(symbol).unwrap();
        let chord = build_match(&IntervalResolver, symbol, &BTreeSet::new(), false, false).unwrap();
        DerivedChord {
            root: parsed.root,
            quality: parsed.quality,
            bass: parsed.bass,
            chord,
        }
    }

    fn sorted_symbols(symbols: &[&str]) -> Vec<String> {
        let mut chords: Vec<DerivedChord> = symbols.iter().map(|s| derived(s)).collect();
        sort_derived(&mut chords);
        chords.into_iter().map(|d| d.chord.symbol).collect()
    }

    #[test]
    fn test_quality_priority_order() {
        let out = sorted_symbols(&["Cm", "C7", "Caug", "C6", "Cm6", "Cmaj7", "C", "Cm7b5"]);
        assert_eq!(out, ["C6", "Cm6", "Cmaj7", "C7", "Cm7b5", "Caug", "C", "Cm"]);
    }

    #[test]
    fn test_slash_sorts_after_base_quality() {
        let out = sorted_symbols(&["Fm6/G", "Gm6", "Fm6", "FmM7"]);
        // The slash m6 lands between the plain m6 chords and the mM7.
        assert_eq!(out, ["Fm6", "Gm6", "Fm6/G", "FmM7"]);
    }

    #[test]
    fn test_ties_break_by_root_pitch_class() {
        let out = sorted_symbols(&["Bb9", "C9", "Db6", "Bb6"]);
        assert_eq!(out, ["Db6", "Bb6", "C9", "Bb9"]);
    }

    #[test]
    fn test_order_independent_of_insertion() {
        let a = sorted_symbols(&["C7", "Db6", "Em7b5", "C/F", "Bb9"]);
        let b = sorted_symbols(&["C/F", "Bb9", "Em7b5", "Db6", "C7"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_diminished_triad_sorts_with_sixth_group() {
        let out = sorted_symbols(&["Cmaj7", "D°", "Cm6"]);
        assert_eq!(out, ["Cm6", "D°", "Cmaj7"]);
    }
}
