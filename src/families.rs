//! The static repository of the three diminished-chord families.
//!
//! Each family groups the four enharmonically equivalent diminished-seventh
//! chords sharing one pitch-class set with the four dominant roots a minor
//! third apart and the four related minor-sixth roots. Together the three
//! families partition the 12 pitch classes; that invariant is checked when
//! the table is first built.

use once_cell::sync::Lazy;

use crate::models::pitch_class::PitchClass;
use crate::models::quality::Quality;
use crate::symbol::dim_root;

/// One diminished-chord equivalence group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiminishedFamily {
    /// Roots of the four diminished chords sharing one pitch-class set.
    pub dim_roots: [PitchClass; 4],
    /// Roots of the four associated dominant-seventh chords.
    pub dominant_roots: [PitchClass; 4],
    /// Roots of the four related minor-sixth chords.
    pub minor6_roots: [PitchClass; 4],
}

/// Dominant voicing variants generated for every dominant root.
pub const DOMINANT_VOICINGS: [Quality; 6] = [
    Quality::Dominant7,
    Quality::Dominant7Flat9,
    Quality::Dominant7Sharp9,
    Quality::Dominant7Flat5,
    Quality::Dominant13Flat9,
    Quality::Dominant7Alt,
];

static FAMILIES: Lazy<[DiminishedFamily; 3]> = Lazy::new(|| {
    use PitchClass::*;
    let families = [
        DiminishedFamily {
            dim_roots: [D, F, Ab, B],
            dominant_roots: [Db, E, G, Bb],
            minor6_roots: [D, F, Ab, B],
        },
        DiminishedFamily {
            dim_roots: [Db, E, G, Bb],
            dominant_roots: [C, Eb, Gb, A],
            minor6_roots: [Db, E, G, Bb],
        },
        DiminishedFamily {
            dim_roots: [C, Eb, Gb, A],
            dominant_roots: [B, D, F, Ab],
            minor6_roots: [C, Eb, Gb, A],
        },
    ];

    // Every pitch class must belong to exactly one family.
    let mut seen = [false; 12];
    for family in &families {
        for root in family.dim_roots {
            let idx = root.index() as usize;
            assert!(!seen[idx], "pitch class {} in two families", root);
            seen[idx] = true;
        }
    }
    assert!(seen.iter().all(|&s| s), "diminished families must cover all 12 roots");

    families
});

/// The three families, in table order.
pub fn families() -> &'static [DiminishedFamily; 3] {
    &FAMILIES
}

/// Find the family containing a diminished chord with the given root.
pub fn find_family(root: PitchClass) -> Option<&'static DiminishedFamily> {
    FAMILIES.iter().find(|family| family.dim_roots.contains(&root))
}

/// Find the family for a canonical `<Root>dim` symbol.
pub fn find_family_for_symbol(canonical: &str) -> Option<(PitchClass, &'static DiminishedFamily)> {
    let root = dim_root(canonical)?;
    find_family(root).map(|family| (root, family))
}
