use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

fn default_show_terms() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    /// List the flagged terms under the corrected output
    #[serde(default = "default_show_terms")]
    pub show_terms: bool,
    #[serde(default)]
    pub watch_clipboard: bool,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            show_terms: default_show_terms(),
            watch_clipboard: false,
        }
    }
}
