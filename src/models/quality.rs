//! Chord qualities as tagged values.
//!
//! The analyzer works on parsed `(root, quality)` pairs rather than raw
//! symbol text, so consolidation and sorting never have to disambiguate
//! overlapping string suffixes (e.g. "m" vs "m7" vs "mM7"). Each quality
//! knows its printed suffix and its semitone intervals from the root.

use serde::{Deserialize, Serialize};

/// Chord quality, covering every symbol shape the candidate generators emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    /// Major 6 chord, suffix "6".
    Major6,
    /// Minor 6 chord, suffix "m6".
    Minor6,
    /// Minor-major 7, suffix "mM7".
    MinorMajor7,
    /// Dominant 9, suffix "9".
    Dominant9,
    /// Major 7, suffix "maj7".
    Major7,
    /// Dominant 7, suffix "7".
    Dominant7,
    /// Minor 7, suffix "m7".
    Minor7,
    /// Half-diminished 7, suffix "m7b5".
    Minor7Flat5,
    /// Dominant 7 suspended 4, suffix "7sus4".
    Dominant7Sus4,
    /// Suspended 4 triad, suffix "sus4".
    Sus4,
    /// Suspended 2 triad, suffix "sus2".
    Sus2,
    /// Dominant 7 sharp 5, suffix "7#5".
    Dominant7Sharp5,
    /// Augmented triad, suffix "aug".
    Augmented,
    /// Plain major triad, empty suffix.
    Major,
    /// Plain minor triad, suffix "m".
    Minor,
    /// Diminished triad, suffix "°".
    DiminishedTriad,
    /// Dominant 7 flat 9, suffix "7(b9)".
    Dominant7Flat9,
    /// Dominant 7 sharp 9, suffix "7(#9)".
    Dominant7Sharp9,
    /// Dominant 7 flat 5, suffix "7(b5)".
    Dominant7Flat5,
    /// Dominant 13 flat 9, suffix "13(b9)".
    Dominant13Flat9,
    /// Altered dominant, suffix "7alt".
    Dominant7Alt,
}

/// The derived-chord quality list, in generation priority order.
pub const DERIVED_QUALITIES: [Quality; 16] = [
    Quality::Major6,
    Quality::Minor6,
    Quality::MinorMajor7,
    Quality::Dominant9,
    Quality::Major7,
    Quality::Dominant7,
    Quality::Minor7,
    Quality::Minor7Flat5,
    Quality::Dominant7Sus4,
    Quality::Sus4,
    Quality::Sus2,
    Quality::Dominant7Sharp5,
    Quality::Augmented,
    Quality::Major,
    Quality::Minor,
    Quality::DiminishedTriad,
];

/// Parse order for symbol suffixes: longest suffix first, so "m7b5" wins
/// over "m7" which wins over "m". `Major` (empty suffix) is the final
/// fallback and matches any bare root name.
pub(crate) const SUFFIX_PARSE_ORDER: [Quality; 21] = [
    Quality::Dominant13Flat9,
    Quality::Dominant7Sus4,
    Quality::Dominant7Flat9,
    Quality::Dominant7Sharp9,
    Quality::Dominant7Flat5,
    Quality::Dominant7Alt,
    Quality::Major7,
    Quality::Sus4,
    Quality::Sus2,
    Quality::Minor7Flat5,
    Quality::MinorMajor7,
    Quality::Dominant7Sharp5,
    Quality::Augmented,
    Quality::Minor6,
    Quality::Minor7,
    Quality::Minor,
    Quality::Major6,
    Quality::Dominant7,
    Quality::Dominant9,
    Quality::DiminishedTriad,
    Quality::Major,
];

impl Quality {
    /// The printed symbol suffix for this quality.
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major6 => "6",
            Quality::Minor6 => "m6",
            Quality::MinorMajor7 => "mM7",
            Quality::Dominant9 => "9",
            Quality::Major7 => "maj7",
            Quality::Dominant7 => "7",
            Quality::Minor7 => "m7",
            Quality::Minor7Flat5 => "m7b5",
            Quality::Dominant7Sus4 => "7sus4",
            Quality::Sus4 => "sus4",
            Quality::Sus2 => "sus2",
            Quality::Dominant7Sharp5 => "7#5",
            Quality::Augmented => "aug",
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::DiminishedTriad => "°",
            Quality::Dominant7Flat9 => "7(b9)",
            Quality::Dominant7Sharp9 => "7(#9)",
            Quality::Dominant7Flat5 => "7(b5)",
            Quality::Dominant13Flat9 => "13(b9)",
            Quality::Dominant7Alt => "7alt",
        }
    }

    /// Semitone intervals of the chord's tones, measured from the root.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Quality::Major6 => &[0, 4, 7, 9],
            Quality::Minor6 => &[0, 3, 7, 9],
            Quality::MinorMajor7 => &[0, 3, 7, 11],
            Quality::Dominant9 => &[0, 2, 4, 7, 10],
            Quality::Major7 => &[0, 4, 7, 11],
            Quality::Dominant7 => &[0, 4, 7, 10],
            Quality::Minor7 => &[0, 3, 7, 10],
            Quality::Minor7Flat5 => &[0, 3, 6, 10],
            Quality::Dominant7Sus4 => &[0, 5, 7, 10],
            Quality::Sus4 => &[0, 5, 7],
            Quality::Sus2 => &[0, 2, 7],
            Quality::Dominant7Sharp5 => &[0, 4, 8, 10],
            Quality::Augmented => &[0, 4, 8],
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::DiminishedTriad => &[0, 3, 6],
            Quality::Dominant7Flat9 => &[0, 1, 4, 7, 10],
            Quality::Dominant7Sharp9 => &[0, 3, 4, 7, 10],
            Quality::Dominant7Flat5 => &[0, 4, 6, 10],
            Quality::Dominant13Flat9 => &[0, 1, 4, 7, 9, 10],
            Quality::Dominant7Alt => &[0, 1, 3, 4, 8, 10],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_roundtrip_through_parse_order() {
        // Every quality in the parse order must be reachable by its own suffix.
        for q in SUFFIX_PARSE_ORDER {
            let winner = SUFFIX_PARSE_ORDER
                .iter()
                .find(|cand| q.suffix().ends_with(cand.suffix()))
                .copied();
            assert_eq!(winner, Some(q), "suffix '{}' shadowed in parse order", q.suffix());
        }
    }

    #[test]
    fn test_parse_order_covers_all_qualities() {
        for q in DERIVED_QUALITIES {
            assert!(SUFFIX_PARSE_ORDER.contains(&q));
        }
    }

    #[test]
    fn test_intervals_include_root() {
        for q in SUFFIX_PARSE_ORDER {
            assert_eq!(q.intervals()[0], 0, "{:?} must contain its root", q);
        }
    }

    #[test]
    fn test_interval_spot_checks() {
        assert_eq!(Quality::Dominant7.intervals(), &[0, 4, 7, 10]);
        assert_eq!(Quality::Minor6.intervals(), &[0, 3, 7, 9]);
        assert_eq!(Quality::Minor7Flat5.intervals(), &[0, 3, 6, 10]);
        assert_eq!(Quality::DiminishedTriad.intervals(), &[0, 3, 6]);
    }
}
