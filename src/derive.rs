//! Enumeration of chords diatonic to a scale, plus the major-sixth family
//! and upper-structure triad generators.
//!
//! A candidate survives only if its entire resolved pitch-class set is a
//! subset of the scale's set; overlapping is not enough. That subset test
//! is what "derivable from this scale" means.

use std::collections::BTreeSet;

use crate::families::DiminishedFamily;
use crate::matching::build_match;
use crate::models::pitch_class::PitchClass;
use crate::models::quality::{Quality, DERIVED_QUALITIES};
use crate::models::result::{ChordMatch, FamilyGroup, UpperStructureTriads};
use crate::resolver::ChordResolver;
use crate::symbol::parse_chord;

/// A derived chord carrying its parsed form for consolidation and sorting.
#[derive(Debug, Clone)]
pub(crate) struct DerivedChord {
    pub root: PitchClass,
    pub quality: Quality,
    pub bass: Option<PitchClass>,
    pub chord: ChordMatch,
}

/// Enumerate every chord diatonic to a minor-sixth-diminished scale:
/// (scale degree x quality) pairs in priority order, plus the three fixed
/// slash-chord candidates built from the scale's 2nd and 5th degrees.
pub(crate) fn derived_chords_for_scale(
    resolver: &dyn ChordResolver,
    scale: &[PitchClass; 8],
    scale_set: &BTreeSet<PitchClass>,
    melody: &BTreeSet<PitchClass>,
    strict: bool,
) -> Vec<DerivedChord> {
    let mut derived = Vec::new();

    for &degree_root in scale {
        for quality in DERIVED_QUALITIES {
            let symbol = format!("{}{}", degree_root, quality.suffix());
            if !is_diatonic(resolver, &symbol, scale_set) {
                continue;
            }
            if let Some(chord) = build_match(resolver, &symbol, melody, strict, false) {
                derived.push(DerivedChord {
                    root: degree_root,
                    quality,
                    bass: None,
                    chord,
                });
            }
        }
    }

    // Slash voicings: m6 and mM7 over the 2nd degree, and the major triad
    // on the 5th degree over the scale root.
    let root = scale[0];
    let second = scale[1];
    let fifth = scale[4];
    let slash_symbols = [
        format!("{}m6/{}", root, second),
        format!("{}mM7/{}", root, second),
        format!("{}/{}", fifth, root),
    ];
    for symbol in slash_symbols {
        if !is_diatonic(resolver, &symbol, scale_set) {
            continue;
        }
        let Some(parsed) = parse_chord(&symbol) else { continue };
        if let Some(chord) = build_match(resolver, &symbol, melody, strict, false) {
            derived.push(DerivedChord {
                root: parsed.root,
                quality: parsed.quality,
                bass: parsed.bass,
                chord,
            });
        }
    }

    derived
}

/// Whether a symbol resolves to a non-empty set fully contained in the scale.
pub(crate) fn is_diatonic(
    resolver: &dyn ChordResolver,
    symbol: &str,
    scale_set: &BTreeSet<PitchClass>,
) -> bool {
    let notes = resolver.resolve(symbol);
    !notes.is_empty() && notes.is_subset(scale_set)
}

/// Build the major-sixth family groups for the four diminished roots.
///
/// `offset` is 0 for the "raise 2" variant and +2 for the "lower 2"
/// variant. Each target root contributes its 6 and maj7 chords plus the
/// minor 7 on the relative-minor root, labeled as a relative-ii voicing.
pub(crate) fn major6_groups(
    resolver: &dyn ChordResolver,
    family: &DiminishedFamily,
    offset: i8,
    melody: &BTreeSet<PitchClass>,
    strict: bool,
) -> Vec<FamilyGroup> {
    let mut groups = Vec::new();

    for &dim_root in &family.dim_roots {
        let target = dim_root.transpose(offset);
        let rel_minor = target.transpose(-3);

        let mut chords = Vec::new();
        for quality in [Quality::Major6, Quality::Major7] {
            let symbol = format!("{}{}", target, quality.suffix());
            if let Some(chord) = build_match(resolver, &symbol, melody, strict, false) {
                chords.push(chord);
            }
        }
        let rel_symbol = format!("{}m7", rel_minor);
        if let Some(mut chord) = build_match(resolver, &rel_symbol, melody, strict, false) {
            chord.label_suffix = Some(format!("(rel II of {})", target));
            chords.push(chord);
        }

        if !chords.is_empty() {
            groups.push(FamilyGroup { root: target, chords });
        }
    }

    groups
}

/// Plain major and minor triads on the family's dominant roots, in
/// ascending chromatic order.
pub(crate) fn upper_structure_triads(
    resolver: &dyn ChordResolver,
    family: &DiminishedFamily,
    melody: &BTreeSet<PitchClass>,
    strict: bool,
) -> UpperStructureTriads {
    let mut roots = family.dominant_roots;
    roots.sort_by_key(|pc| pc.index());

    let collect = |quality: Quality| -> Vec<ChordMatch> {
        roots
            .iter()
            .filter_map(|root| {
                let symbol = format!("{}{}", root, quality.suffix());
                build_match(resolver, &symbol, melody, strict, false)
            })
            .collect()
    };

    UpperStructureTriads {
        major: collect(Quality::Major),
        minor: collect(Quality::Minor),
    }
}
