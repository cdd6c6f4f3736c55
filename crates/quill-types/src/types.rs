use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    TextChanged {
        text: String,
        source: TextSource,
    },
    ShowCorrection(CorrectionView),
    Busy(bool),
    CopyOutput,
    Copied(bool),
    Notice(String),
    UiEvent(UiEvent),
}

#[derive(Debug, Clone)]
pub enum TextSource {
    Stdin,
    Clipboard,
    Manual,
}

/// A fully classified correction, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionView {
    pub original: String,
    pub corrected_text: String,
    pub is_translated: bool,
    pub untranslatable_words: Vec<String>,
    pub segments: Vec<Segment>,
}

impl CorrectionView {
    pub fn is_empty(&self) -> bool {
        self.corrected_text.is_empty()
    }
}

/// Structured display fragment. Flagged segments carry terms the model
/// could not confidently translate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Plain(String),
    Flagged(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(s) | Segment::Flagged(s) => s,
        }
    }
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}
