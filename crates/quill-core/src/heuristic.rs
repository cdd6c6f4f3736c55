/// Tunable thresholds for the translation detector.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    /// Non-ASCII fraction the input must exceed to look foreign
    pub source_non_latin_min: f64,
    /// Non-ASCII fraction the output must stay under to look English
    pub corrected_non_latin_max: f64,
    /// Relative length change that also counts as a translation
    pub length_shift_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            source_non_latin_min: 0.3,
            corrected_non_latin_max: 0.1,
            length_shift_min: 0.4,
        }
    }
}

/// Fraction of characters outside the 7-bit Latin range; 0.0 for empty text.
pub fn non_latin_fraction(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    let non_latin = text.chars().filter(|c| !c.is_ascii()).count();
    non_latin as f64 / total as f64
}

/// Best-effort guess whether the model translated rather than just
/// corrected: either the script flipped from mostly non-Latin to mostly
/// Latin, or the length shifted by more than the configured fraction.
pub fn translation_occurred(original: &str, corrected: &str, thresholds: &Thresholds) -> bool {
    if original.is_empty() {
        return false;
    }

    if non_latin_fraction(original) > thresholds.source_non_latin_min
        && non_latin_fraction(corrected) < thresholds.corrected_non_latin_max
    {
        return true;
    }

    let original_len = original.chars().count() as f64;
    let corrected_len = corrected.chars().count() as f64;
    (original_len - corrected_len).abs() / original_len > thresholds.length_shift_min
}
