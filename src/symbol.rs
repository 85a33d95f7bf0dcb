//! Chord-symbol normalization and parsing.
//!
//! Normalization is total: any input string comes out as a trimmed,
//! ASCII-accidental, capitalized token (possibly empty). Parsing into
//! `(root, quality, bass)` is partial; the analysis treats an unparseable
//! symbol as "no notes" rather than an error.

use crate::models::pitch_class::PitchClass;
use crate::models::quality::{Quality, SUFFIX_PARSE_ORDER};

/// A chord symbol parsed into tagged values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedChord {
    pub root: PitchClass,
    pub quality: Quality,
    /// Slash-chord bass note, when present.
    pub bass: Option<PitchClass>,
}

/// Canonicalize accidental glyphs, casing, and quality aliases.
///
/// Replaces the Unicode flat/sharp/dash glyphs with their ASCII forms,
/// capitalizes the first letter, and maps the first "min" to "m". Never
/// fails; empty input normalizes to the empty string.
pub fn normalize_input(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let s = trimmed.replace('♭', "b").replace('♯', "#").replace('–', "-");
    let mut chars = s.chars();
    let mut out = String::with_capacity(s.len());
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.push_str(chars.as_str());
    }
    out.replacen("min", "m", 1)
}

/// Collapse the diminished suffix variants (`°7`, `°`, `dim7`) to `dim` and
/// canonicalize the root spelling, yielding the family lookup key
/// `<Root>dim`. A symbol whose root does not parse is returned unchanged
/// (and will miss every family).
pub fn canonical_dim(symbol: &str) -> String {
    let collapsed = symbol
        .replace("°7", "dim")
        .replace('°', "dim")
        .replace("dim7", "dim");
    match collapsed.strip_suffix("dim").map(str::trim) {
        Some(root) => match root.parse::<PitchClass>() {
            Ok(pc) => format!("{}dim", pc),
            Err(_) => collapsed,
        },
        None => collapsed,
    }
}

/// The root pitch class of a canonical `<Root>dim` symbol.
pub fn dim_root(canonical: &str) -> Option<PitchClass> {
    canonical.strip_suffix("dim")?.parse().ok()
}

/// Parse a chord symbol into root, quality, and optional slash bass.
///
/// Quality is matched by longest suffix, so "Cm7b5" parses as half
/// diminished rather than minor 7. Returns `None` for anything whose root
/// is not a valid note name.
pub fn parse_chord(symbol: &str) -> Option<ParsedChord> {
    let (main, bass) = match symbol.split_once('/') {
        Some((main, bass)) => (main, Some(bass.parse::<PitchClass>().ok()?)),
        None => (symbol, None),
    };
    let (root, quality) = split_quality(main)?;
    Some(ParsedChord { root, quality, bass })
}

fn split_quality(symbol: &str) -> Option<(PitchClass, Quality)> {
    for quality in SUFFIX_PARSE_ORDER {
        if let Some(prefix) = symbol.strip_suffix(quality.suffix()) {
            if let Ok(root) = prefix.parse::<PitchClass>() {
                return Some((root, quality));
            }
        }
    }
    None
}
