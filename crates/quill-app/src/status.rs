use std::sync::atomic::{AtomicU64, Ordering};

/// Correction pipeline counters
#[derive(Debug, Default)]
pub struct CorrectionStatus {
    pub submitted: AtomicU64,
    pub failed: AtomicU64,
    pub superseded: AtomicU64,
}

/// Application status
pub struct AppStatus {
    pub corrections: CorrectionStatus,
}

impl AppStatus {
    pub fn new() -> Self {
        Self {
            corrections: CorrectionStatus::default(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "submitted={} failed={} superseded={}",
            self.corrections.submitted.load(Ordering::Relaxed),
            self.corrections.failed.load(Ordering::Relaxed),
            self.corrections.superseded.load(Ordering::Relaxed),
        )
    }
}

impl Default for AppStatus {
    fn default() -> Self {
        Self::new()
    }
}
