//! The analysis entry point.
//!
//! `analyze` is a pure, total function: every reachable state returns a
//! populated result or a result carrying a human-readable message. Nothing
//! is cached between calls and no state is shared, so callers may invoke it
//! as often as they like (e.g. on every keystroke) from any thread.

use std::collections::BTreeSet;

use crate::consolidate::consolidate;
use crate::derive::{derived_chords_for_scale, major6_groups, upper_structure_triads};
use crate::families::{find_family_for_symbol, DOMINANT_VOICINGS};
use crate::matching::build_match;
use crate::models::config::Config;
use crate::models::pitch_class::PitchClass;
use crate::models::result::{AnalysisResult, FamilyGroup, RelatedMinorSix, SystemMovement};
use crate::models::scale::{role_for_degree, scale_pitch_classes, NoteRole, ScaleKind, ScaleNote};
use crate::resolver::{ChordResolver, IntervalResolver};
use crate::sort::sort_derived;
use crate::symbol::{canonical_dim, normalize_input};

/// Informational message for empty input.
pub const INFO_EMPTY_INPUT: &str = "Enter a chord to begin.";
/// Rejection message for non-diminished chords.
pub const ERR_UNSUPPORTED: &str = "unsupported chord type";
/// Rejection message for diminished symbols missing from the repository.
pub const ERR_NOT_FOUND: &str = "chord not found in database";

/// Analyze a diminished chord and optional melody with the built-in
/// resolver.
pub fn analyze(chord_input: &str, melody_input: &str, config: &Config) -> AnalysisResult {
    analyze_with_resolver(&IntervalResolver, chord_input, melody_input, config)
}

/// Analyze with an injected chord resolver.
pub fn analyze_with_resolver(
    resolver: &dyn ChordResolver,
    chord_input: &str,
    melody_input: &str,
    config: &Config,
) -> AnalysisResult {
    let normalized = normalize_input(chord_input);
    if normalized.is_empty() {
        return AnalysisResult {
            info: Some(INFO_EMPTY_INPUT.to_string()),
            ..Default::default()
        };
    }

    // Melody tokens that are not note names are skipped, not errors.
    let melody_list: Vec<PitchClass> = melody_input
        .split_whitespace()
        .filter_map(|token| normalize_input(token).parse().ok())
        .collect();
    let melody_set: BTreeSet<PitchClass> = melody_list.iter().copied().collect();

    let is_diminished = normalized.to_lowercase().contains("dim") || normalized.contains('°');
    if !is_diminished {
        return AnalysisResult::rejected(normalized, ERR_UNSUPPORTED);
    }

    let canonical = canonical_dim(&normalized);
    let Some((root, family)) = find_family_for_symbol(&canonical) else {
        return AnalysisResult::rejected(normalized, ERR_NOT_FOUND);
    };
    log::debug!("{} resolved to family of {:?}", canonical, family.dim_roots);

    let display_chord = format!("{}°", root);
    let strict = config.hide_if_melody_not_in_chord;

    // Main scale with degree roles; melody notes outside the scale are
    // appended rather than dropped.
    let scale = scale_pitch_classes(root, ScaleKind::Diminished);
    let scale_set: BTreeSet<PitchClass> = scale.iter().copied().collect();
    let mut scale_notes: Vec<ScaleNote> = scale
        .iter()
        .enumerate()
        .map(|(degree, &pc)| ScaleNote {
            note: pc,
            role: role_for_degree(degree),
            is_melody: melody_set.contains(&pc),
        })
        .collect();
    for &note in &melody_list {
        let already_shown = scale_notes.iter().any(|sn| sn.note == note);
        if !scale_set.contains(&note) && !already_shown {
            scale_notes.push(ScaleNote {
                note,
                role: NoteRole::NotInScale,
                is_melody: true,
            });
        }
    }

    let melody_analysis: Vec<ScaleNote> = melody_list
        .iter()
        .map(|&note| ScaleNote {
            note,
            role: scale
                .iter()
                .position(|&pc| pc == note)
                .map(role_for_degree)
                .unwrap_or(NoteRole::NotInScale),
            is_melody: true,
        })
        .collect();

    // The current chord resolves down a half step onto its passing chord.
    let system_movement = SystemMovement {
        on: display_chord.clone(),
        off: format!("{}°", root.half_step_down()),
    };

    // Dominant families.
    let mut families = Vec::new();
    for &dominant_root in &family.dominant_roots {
        let chords: Vec<_> = DOMINANT_VOICINGS
            .iter()
            .filter_map(|quality| {
                let symbol = format!("{}{}", dominant_root, quality.suffix());
                build_match(resolver, &symbol, &melody_set, strict, false)
            })
            .collect();
        if !chords.is_empty() {
            families.push(FamilyGroup {
                root: dominant_root,
                chords,
            });
        }
    }

    // Related minor-sixth groups: one per family m6 root whose scale
    // contains the whole melody.
    let mut related_minor_sixths = Vec::new();
    for &m6_root in &family.minor6_roots {
        let m6_scale = scale_pitch_classes(m6_root, ScaleKind::Minor6Diminished);
        let m6_set: BTreeSet<PitchClass> = m6_scale.iter().copied().collect();
        if !melody_set.is_subset(&m6_set) {
            continue;
        }

        // The group's root chord is always shown when the melody is
        // diatonic to its scale, even if it omits chord tones.
        let root_symbol = format!("{}m6", m6_root);
        let Some(root_chord) = build_match(resolver, &root_symbol, &melody_set, strict, true)
        else {
            continue;
        };

        let scale_display: Vec<ScaleNote> = m6_scale
            .iter()
            .enumerate()
            .map(|(degree, &pc)| ScaleNote {
                note: pc,
                role: role_for_degree(degree),
                is_melody: melody_set.contains(&pc),
            })
            .collect();

        let mut derived =
            derived_chords_for_scale(resolver, &m6_scale, &m6_set, &melody_set, strict);
        if config.consolidate_results {
            consolidate(resolver, &mut derived, &m6_set);
        }
        sort_derived(&mut derived);
        log::debug!("{}: {} derived chords", root_symbol, derived.len());

        related_minor_sixths.push(RelatedMinorSix {
            chord: root_chord,
            scale: scale_display,
            derived_chords: derived.into_iter().map(|d| d.chord).collect(),
        });
    }

    let triads = upper_structure_triads(resolver, family, &melody_set, strict);
    let major6_raise2 = major6_groups(resolver, family, 0, &melody_set, strict);
    let major6_lower2 = major6_groups(resolver, family, 2, &melody_set, strict);

    AnalysisResult {
        display_chord,
        scale_root: Some(root),
        scale_kind: Some(ScaleKind::Diminished),
        scale_notes,
        system_movement: Some(system_movement),
        melody_analysis,
        families,
        related_minor_sixths,
        major6_raise2,
        major6_lower2,
        upper_structure_triads: triads,
        error: None,
        info: None,
    }
}
