use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use quill_config::corrector::CorrectorConfig;
use quill_core::heuristic::Thresholds;
use quill_core::pipeline::Corrector;
use quill_corrector::CorrectionModel;
use quill_types::AppEvent;

use crate::state::AppState;

pub mod copy_output;
pub mod text_input;

use copy_output::handle_copy;
use text_input::handle_text_changed;

pub fn thresholds_from(config: &CorrectorConfig) -> Thresholds {
    Thresholds {
        source_non_latin_min: config.source_non_latin_min,
        corrected_non_latin_max: config.corrected_non_latin_max,
        length_shift_min: config.length_shift_min,
    }
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    model: Arc<dyn CorrectionModel>,
) -> anyhow::Result<()> {
    let corrector = {
        let config = state.config.read().await;
        Arc::new(Corrector::new(
            model,
            Duration::from_millis(config.corrector.quiet_ms),
            thresholds_from(&config.corrector),
        ))
    };

    tracing::info!("event loop started, waiting for input");
    loop {
        let event = ui_to_app_rx.recv().await?;
        handle_events(state.clone(), corrector.clone(), &app_to_ui_tx, event).await?;
    }
}

async fn handle_events(
    state: Arc<AppState>,
    corrector: Arc<Corrector>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {}
        AppEvent::TextChanged { text, source } => {
            handle_text_changed(state, corrector, app_to_ui_tx.clone(), text, source);
        }
        AppEvent::CopyOutput => {
            handle_copy(state, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(event) => {
            // input surfaces address the UI through the backend channel
            app_to_ui_tx.send(AppEvent::UiEvent(event)).await?;
        }
        AppEvent::ShowCorrection(_)
        | AppEvent::Busy(_)
        | AppEvent::Copied(_)
        | AppEvent::Notice(_) => {
            // UI-bound events, nothing to do in the backend
        }
    }

    Ok(())
}
