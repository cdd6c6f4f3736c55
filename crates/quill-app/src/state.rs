use std::sync::Arc;

use quill_config::Config;
use quill_types::CorrectionView;
use tokio::sync::RwLock;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// Most recent view applied to the display; the copy action reads it
    pub last_view: RwLock<Option<CorrectionView>>,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            last_view: RwLock::new(None),
            status: AppStatus::new(),
        }
    }
}
