//! Consolidation of harmonically redundant derived chords.
//!
//! A fixed sequence of reduction passes over parsed `(root, quality)`
//! values; later passes see the survivors of earlier ones. The one rule
//! every pass obeys: a dropped symbol must be referenced by exactly one
//! surviving chord's label. Nothing is lost silently.

use std::collections::BTreeSet;

use crate::derive::{is_diatonic, DerivedChord};
use crate::models::pitch_class::PitchClass;
use crate::models::quality::Quality;
use crate::models::result::ChordMatch;
use crate::resolver::ChordResolver;

/// Qualities that make a plain major triad redundant on the same root.
const MAJOR_TRIAD_EXTENSIONS: [Quality; 4] = [
    Quality::Major6,
    Quality::Major7,
    Quality::Dominant7,
    Quality::Dominant9,
];

/// Qualities that make a plain minor triad redundant on the same root.
const MINOR_TRIAD_EXTENSIONS: [Quality; 3] =
    [Quality::Minor6, Quality::Minor7, Quality::MinorMajor7];

/// Run the consolidation passes in order, in place.
pub(crate) fn consolidate(
    resolver: &dyn ChordResolver,
    chords: &mut Vec<DerivedChord>,
    scale_set: &BTreeSet<PitchClass>,
) {
    let mut alive = vec![true; chords.len()];

    sixth_synonyms(chords, &mut alive);
    triad_subsumption(chords, &mut alive);
    sus_consolidation(resolver, chords, &mut alive, scale_set);
    augmented_consolidation(chords, &mut alive);
    ninth_slash_labels(resolver, chords, scale_set, &alive);

    let mut keep = alive.into_iter();
    chords.retain(|_| keep.next().unwrap_or(false));
}

/// Pass 1: a major 6 chord and the minor 7 on its relative-minor root name
/// the same pitch-class set; the 6 chord survives and carries the dropped
/// symbol. A minor 6 and the half-diminished on its relative-minor root are
/// inversions of each other; both survive, cross-labeled.
fn sixth_synonyms(chords: &mut [DerivedChord], alive: &mut [bool]) {
    for i in 0..chords.len() {
        if !alive[i] || chords[i].bass.is_some() {
            continue;
        }
        let rel = chords[i].root.transpose(-3);
        match chords[i].quality {
            Quality::Major6 => {
                if let Some(j) = find_alive(chords, alive, rel, Quality::Minor7) {
                    let dropped = chords[j].chord.symbol.clone();
                    push_label(&mut chords[i].chord, &format!("({})", dropped));
                    alive[j] = false;
                }
            }
            Quality::Minor6 => {
                if let Some(j) = find_alive(chords, alive, rel, Quality::Minor7Flat5) {
                    let six_symbol = chords[i].chord.symbol.clone();
                    let half_dim_symbol = chords[j].chord.symbol.clone();
                    push_label(&mut chords[i].chord, &format!("(aka {})", half_dim_symbol));
                    push_label(&mut chords[j].chord, &format!("(inv. {})", six_symbol));
                }
            }
            _ => {}
        }
    }
}

/// Pass 2: a plain triad is absorbed by a retained harmonic extension on
/// the same root. Roots are compared as pitch classes, not symbol text.
fn triad_subsumption(chords: &mut [DerivedChord], alive: &mut [bool]) {
    for i in 0..chords.len() {
        if !alive[i] || chords[i].bass.is_some() {
            continue;
        }
        let extensions: &[Quality] = match chords[i].quality {
            Quality::Major => &MAJOR_TRIAD_EXTENSIONS,
            Quality::Minor => &MINOR_TRIAD_EXTENSIONS,
            _ => continue,
        };
        let root = chords[i].root;
        let absorber = (0..chords.len()).find(|&j| {
            j != i && alive[j] && chords[j].root == root && extensions.contains(&chords[j].quality)
        });
        if let Some(j) = absorber {
            let triad_symbol = chords[i].chord.symbol.clone();
            push_label(&mut chords[j].chord, &format!("(inc. {})", triad_symbol));
            alive[i] = false;
        }
    }
}

/// Pass 3: a 7sus4 absorbs its plain sus4/sus2 counterparts, and gains the
/// slash-chord reading (major triad a whole step below) when that triad is
/// diatonic. A surviving plain sus4 still absorbs its sus2.
fn sus_consolidation(
    resolver: &dyn ChordResolver,
    chords: &mut [DerivedChord],
    alive: &mut [bool],
    scale_set: &BTreeSet<PitchClass>,
) {
    for i in 0..chords.len() {
        if !alive[i] || chords[i].quality != Quality::Dominant7Sus4 {
            continue;
        }
        let root = chords[i].root;
        let mut parts: Vec<String> = Vec::new();

        let below = root.transpose(-2);
        if is_diatonic(resolver, below.as_str(), scale_set) {
            parts.push(format!("or {}/{}", below, root));
        }

        let mut absorbed = Vec::new();
        for quality in [Quality::Sus4, Quality::Sus2] {
            if let Some(j) = find_alive(chords, alive, root, quality) {
                absorbed.push(chords[j].chord.symbol.clone());
                alive[j] = false;
            }
        }
        if !absorbed.is_empty() {
            parts.push(format!("inc. {}", absorbed.join(", ")));
        }

        if !parts.is_empty() {
            push_label(&mut chords[i].chord, &format!("({})", parts.join("; ")));
        }
    }

    // Plain sus4 with no 7sus4 above it still swallows its sus2.
    for i in 0..chords.len() {
        if !alive[i] || chords[i].quality != Quality::Sus4 {
            continue;
        }
        let root = chords[i].root;
        if let Some(j) = find_alive(chords, alive, root, Quality::Sus2) {
            let dropped = chords[j].chord.symbol.clone();
            alive[j] = false;
            push_label(&mut chords[i].chord, &format!("(inc. {})", dropped));
        }
    }
}

/// Pass 4: a 7#5 absorbs the plain augmented triad on its root.
fn augmented_consolidation(chords: &mut [DerivedChord], alive: &mut [bool]) {
    for i in 0..chords.len() {
        if !alive[i] || chords[i].quality != Quality::Dominant7Sharp5 {
            continue;
        }
        let root = chords[i].root;
        if let Some(j) = find_alive(chords, alive, root, Quality::Augmented) {
            let dropped = chords[j].chord.symbol.clone();
            alive[j] = false;
            push_label(&mut chords[i].chord, &format!("(inc. {})", dropped));
        }
    }
}

/// Pass 5: a plain dominant 9 is labeled as the slash voicing of the minor
/// 6 chord a perfect fifth above its root, when that chord is diatonic.
/// Nothing is dropped.
fn ninth_slash_labels(
    resolver: &dyn ChordResolver,
    chords: &mut [DerivedChord],
    scale_set: &BTreeSet<PitchClass>,
    alive: &[bool],
) {
    for i in 0..chords.len() {
        if !alive[i] || chords[i].quality != Quality::Dominant9 {
            continue;
        }
        let root = chords[i].root;
        let fifth_up = root.transpose(7);
        let m6_symbol = format!("{}m6", fifth_up);
        if is_diatonic(resolver, &m6_symbol, scale_set) {
            push_label(&mut chords[i].chord, &format!("(or {}/{})", m6_symbol, root));
        }
    }
}

fn find_alive(
    chords: &[DerivedChord],
    alive: &[bool],
    root: PitchClass,
    quality: Quality,
) -> Option<usize> {
    (0..chords.len()).find(|&j| {
        alive[j] && chords[j].bass.is_none() && chords[j].root == root && chords[j].quality == quality
    })
}

fn push_label(chord: &mut ChordMatch, text: &str) {
    match &mut chord.label_suffix {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(text);
        }
        None => chord.label_suffix = Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derived_chords_for_scale;
    use crate::models::scale::{scale_pitch_classes, ScaleKind};
    use crate::resolver::IntervalResolver;
    use PitchClass::*;

    fn consolidated_fm6() -> Vec<DerivedChord> {
        let scale = scale_pitch_classes(F, ScaleKind::Minor6Diminished);
        let set: BTreeSet<PitchClass> = scale.iter().copied().collect();
        let melody = BTreeSet::new();
        let mut derived =
            derived_chords_for_scale(&IntervalResolver, &scale, &set, &melody, false);
        consolidate(&IntervalResolver, &mut derived, &set);
        derived
    }

    fn find<'a>(chords: &'a [DerivedChord], symbol: &str) -> &'a DerivedChord {
        chords
            .iter()
            .find(|d| d.chord.symbol == symbol)
            .unwrap_or_else(|| panic!("{} missing", symbol))
    }

    fn symbols(chords: &[DerivedChord]) -> Vec<&str> {
        chords.iter().map(|d| d.chord.symbol.as_str()).collect()
    }

    #[test]
    fn test_major6_absorbs_relative_minor7() {
        let chords = consolidated_fm6();
        let syms = symbols(&chords);
        // Db6 and Bbm7 share a pitch-class set; only the 6 chord survives.
        assert!(syms.contains(&"Db6"));
        assert!(!syms.contains(&"Bbm7"));
        let db6 = find(&chords, "Db6");
        assert!(db6.chord.label_suffix.as_deref().unwrap().contains("(Bbm7)"));
    }

    #[test]
    fn test_minor6_and_half_diminished_cross_labeled() {
        let chords = consolidated_fm6();
        let syms = symbols(&chords);
        assert!(syms.contains(&"Fm6"));
        assert!(syms.contains(&"Dm7b5"));
        let fm6 = find(&chords, "Fm6");
        let dm7b5 = find(&chords, "Dm7b5");
        assert!(fm6.chord.label_suffix.as_deref().unwrap().contains("(aka Dm7b5)"));
        assert!(dm7b5.chord.label_suffix.as_deref().unwrap().contains("(inv. Fm6)"));
    }

    #[test]
    fn test_triads_absorbed_by_extensions() {
        let chords = consolidated_fm6();
        let syms = symbols(&chords);
        // The plain C, Db, Bb majors and Fm, Gm, Bbm minors all have
        // retained extensions on the same root.
        for triad in ["C", "Db", "Bb", "Fm", "Gm", "Bbm"] {
            assert!(!syms.contains(&triad), "{} should be absorbed", triad);
        }
        // Each dropped triad is referenced by exactly one survivor.
        for triad in ["C", "Db", "Bb", "Fm", "Gm", "Bbm"] {
            let needle = format!("(inc. {})", triad);
            let referencing = chords
                .iter()
                .filter(|d| {
                    d.chord
                        .label_suffix
                        .as_deref()
                        .map(|l| l.contains(&needle))
                        .unwrap_or(false)
                })
                .count();
            assert_eq!(referencing, 1, "{} referenced {} times", triad, referencing);
        }
    }

    #[test]
    fn test_sus_consolidation_with_slash_reading() {
        let chords = consolidated_fm6();
        let syms = symbols(&chords);
        assert!(syms.contains(&"C7sus4"));
        assert!(!syms.contains(&"Csus4"));
        assert!(!syms.contains(&"Csus2"));
        let c7sus4 = find(&chords, "C7sus4");
        let label = c7sus4.chord.label_suffix.as_deref().unwrap();
        // Bb major triad is two whole steps below C and diatonic here.
        assert!(label.contains("or Bb/C"), "label was {:?}", label);
        assert!(label.contains("inc. Csus4, Csus2"), "label was {:?}", label);

        // G7sus4 absorbs Gsus4; Gsus2 is not diatonic (no A in the scale)
        // and F major is not diatonic either, so no slash reading.
        let g7sus4 = find(&chords, "G7sus4");
        let label = g7sus4.chord.label_suffix.as_deref().unwrap();
        assert!(label.contains("inc. Gsus4"));
        assert!(!label.contains("or F/G"));
        assert!(!symbols(&chords).contains(&"Gsus4"));
    }

    #[test]
    fn test_augmented_absorbed_by_seven_sharp_five() {
        let chords = consolidated_fm6();
        let syms = symbols(&chords);
        assert!(syms.contains(&"C7#5"));
        assert!(!syms.contains(&"Caug"));
        let c7s5 = find(&chords, "C7#5");
        assert!(c7s5.chord.label_suffix.as_deref().unwrap().contains("(inc. Caug)"));
        // Abaug has no Ab7#5 sibling and survives untouched.
        assert!(syms.contains(&"Abaug"));
        assert!(find(&chords, "Abaug").chord.label_suffix.is_none());
    }

    #[test]
    fn test_ninth_gains_minor6_slash_label() {
        let chords = consolidated_fm6();
        let bb9 = find(&chords, "Bb9");
        assert!(bb9
            .chord
            .label_suffix
            .as_deref()
            .unwrap()
            .contains("(or Fm6/Bb)"));
        let c9 = find(&chords, "C9");
        assert!(c9
            .chord
            .label_suffix
            .as_deref()
            .unwrap()
            .contains("(or Gm6/C)"));
    }

    /// Whether a label references a symbol as a whole token. Slash voicings
    /// like "Gm6/C" are one token and do not count as a reference to "C".
    fn label_references(label: &str, symbol: &str) -> bool {
        label
            .split(|c| matches!(c, ' ' | '(' | ')' | ';' | ','))
            .any(|token| token == symbol)
    }

    #[test]
    fn test_every_dropped_symbol_is_referenced_once() {
        let scale = scale_pitch_classes(F, ScaleKind::Minor6Diminished);
        let set: BTreeSet<PitchClass> = scale.iter().copied().collect();
        let melody = BTreeSet::new();
        let before = derived_chords_for_scale(&IntervalResolver, &scale, &set, &melody, false);
        let mut after = before.clone();
        consolidate(&IntervalResolver, &mut after, &set);

        let survivors: Vec<&str> = after.iter().map(|d| d.chord.symbol.as_str()).collect();
        for d in &before {
            let symbol = d.chord.symbol.as_str();
            if survivors.contains(&symbol) {
                continue;
            }
            let references = after
                .iter()
                .filter(|s| {
                    s.chord
                        .label_suffix
                        .as_deref()
                        .map(|l| label_references(l, symbol))
                        .unwrap_or(false)
                })
                .count();
            assert_eq!(references, 1, "dropped {} referenced {} times", symbol, references);
        }
    }
}
