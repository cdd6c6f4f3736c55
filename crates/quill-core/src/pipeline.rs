use std::sync::Arc;
use std::time::Duration;

use quill_corrector::CorrectionModel;

use crate::debounce::Debouncer;
use crate::heuristic::{self, Thresholds};
use crate::markup;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// One settled correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub is_translated: bool,
    pub untranslatable_words: Vec<String>,
}

impl CorrectionResult {
    pub fn empty() -> Self {
        Self {
            corrected_text: String::new(),
            is_translated: false,
            untranslatable_words: Vec::new(),
        }
    }

    /// Failure fallback: the original input, untouched.
    pub fn fallback(original: &str) -> Self {
        Self {
            corrected_text: original.to_string(),
            is_translated: false,
            untranslatable_words: Vec::new(),
        }
    }
}

/// How one submit resolved. A submit never errors: provider failures
/// degrade to the original text, and windows a later submit overtook
/// report themselves as superseded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done(CorrectionResult),
    Degraded(CorrectionResult),
    Superseded,
}

/// Debounced correction pipeline: preprocess, one provider call per
/// settled value, classify, never more than one current window.
pub struct Corrector {
    model: Arc<dyn CorrectionModel>,
    debounce: Debouncer,
    thresholds: Thresholds,
    preprocessor: DefaultPreprocessor,
}

impl Corrector {
    pub fn new(model: Arc<dyn CorrectionModel>, quiet: Duration, thresholds: Thresholds) -> Self {
        Self {
            model,
            debounce: Debouncer::new(quiet),
            thresholds,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub async fn submit(&self, text: &str) -> Outcome {
        if text.trim().is_empty() {
            // supersede any pending window so it cannot repaint a cleared display
            self.debounce.issue();
            return Outcome::Done(CorrectionResult::empty());
        }

        let ticket = self.debounce.issue();
        if self.debounce.settle(ticket).await.is_none() {
            return Outcome::Superseded;
        }

        let cleaned = self.preprocessor.process(text);
        match self.model.correct(&cleaned).await {
            Ok(raw) => {
                if !self.debounce.is_current(ticket) {
                    tracing::debug!("discarding stale correction response");
                    return Outcome::Superseded;
                }

                let (display, terms) = markup::extract_flagged(&raw);
                let is_translated =
                    heuristic::translation_occurred(&cleaned, &display, &self.thresholds);

                Outcome::Done(CorrectionResult {
                    corrected_text: display,
                    is_translated,
                    untranslatable_words: terms,
                })
            }
            Err(e) => {
                tracing::error!("correction failed: {e}");
                if !self.debounce.is_current(ticket) {
                    return Outcome::Superseded;
                }
                Outcome::Degraded(CorrectionResult::fallback(text))
            }
        }
    }
}
