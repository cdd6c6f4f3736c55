use serde::{Deserialize, Serialize};

fn default_quiet_ms() -> u64 {
    500
}

fn default_source_non_latin_min() -> f64 {
    0.3
}

fn default_corrected_non_latin_max() -> f64 {
    0.1
}

fn default_length_shift_min() -> f64 {
    0.4
}

/// Debounce window plus the translation-detection thresholds. The
/// heuristic is best-effort; the thresholds are tunable, not a contract.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CorrectorConfig {
    #[serde(default = "default_quiet_ms")]
    pub quiet_ms: u64,
    /// Non-ASCII fraction the input must exceed to look foreign
    #[serde(default = "default_source_non_latin_min")]
    pub source_non_latin_min: f64,
    /// Non-ASCII fraction the output must stay under to look English
    #[serde(default = "default_corrected_non_latin_max")]
    pub corrected_non_latin_max: f64,
    /// Relative length change that also counts as a translation
    #[serde(default = "default_length_shift_min")]
    pub length_shift_min: f64,
}

impl CorrectorConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            quiet_ms: default_quiet_ms(),
            source_non_latin_min: default_source_non_latin_min(),
            corrected_non_latin_max: default_corrected_non_latin_max(),
            length_shift_min: default_length_shift_min(),
        }
    }
}
