//! Analysis configuration flags.

use serde::{Deserialize, Serialize};

/// Boolean options controlling filtering and consolidation.
///
/// `large_chord_font` and `highlight_extensions` are presentation options
/// carried for the caller's benefit; the analysis never reads them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Presentation only, ignored by the analysis.
    pub highlight_extensions: bool,
    /// Strict filtering: hide any chord that does not contain the whole
    /// melody.
    pub hide_if_melody_not_in_chord: bool,
    /// Reserved. Declared for interface compatibility but gates no
    /// filtering decision.
    pub hide_if_melody_not_in_scale: bool,
    /// Presentation only, ignored by the analysis.
    pub large_chord_font: bool,
    /// Enable consolidation of harmonically redundant derived chords.
    pub consolidate_results: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let config = Config::default();
        assert!(!config.hide_if_melody_not_in_chord);
        assert!(!config.consolidate_results);
    }

    #[test]
    fn test_serde_camel_case() {
        let json = r#"{"hideIfMelodyNotInChord":true,"consolidateResults":true}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.hide_if_melody_not_in_chord);
        assert!(config.consolidate_results);
        assert!(!config.large_chord_font);
    }
}
