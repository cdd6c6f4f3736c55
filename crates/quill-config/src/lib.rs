use std::env;

use serde::{Deserialize, Serialize};

use self::corrector::CorrectorConfig;
use self::provider::ProviderConfig;
use self::ui::UiConfig;

pub mod corrector;
pub mod provider;
pub mod ui;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub corrector: CorrectorConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config {
            provider: ProviderConfig::new(),
            corrector: CorrectorConfig::new(),
            ui: UiConfig::new(),
        };
        config.apply_env();
        config
    }

    /// Environment overrides, applied after any profile file is loaded.
    /// The API key never lives in profile files.
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("GEMINI_API_KEY") {
            self.provider.api_key = key;
        }
        if let Ok(url) = env::var("GEMINI_API_URL") {
            self.provider.api_url = url;
        }
        if let Some(quiet) = env::var("QUILL_QUIET_MS").ok().and_then(|v| v.parse().ok()) {
            self.corrector.quiet_ms = quiet;
        }
    }
}
