use std::sync::Arc;
use std::sync::atomic::Ordering;

use kanal::AsyncSender;
use quill_core::markup;
use quill_core::pipeline::{CorrectionResult, Corrector, Outcome};
use quill_types::{AppEvent, CorrectionView, TextSource};

use crate::state::AppState;

const FAILURE_NOTICE: &str = "Failed to process text. Please try again.";

/// Kick off one debounced correction. Returns immediately; the spawned
/// task resolves through the pipeline and applies the outcome, so the
/// event loop stays free to accept the next keystroke.
pub fn handle_text_changed(
    state: Arc<AppState>,
    corrector: Arc<Corrector>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    text: String,
    source: TextSource,
) {
    tracing::debug!("input from {:?}: {} chars", source, text.chars().count());

    tokio::spawn(async move {
        let blank = text.trim().is_empty();
        if !blank {
            state.status.corrections.submitted.fetch_add(1, Ordering::Relaxed);
            if let Err(e) = app_to_ui_tx.send(AppEvent::Busy(true)).await {
                tracing::error!("failed to signal busy: {e}");
            }
        }

        match corrector.submit(&text).await {
            Outcome::Done(result) => {
                apply(&state, &app_to_ui_tx, text, result, false).await;
            }
            Outcome::Degraded(result) => {
                state.status.corrections.failed.fetch_add(1, Ordering::Relaxed);
                apply(&state, &app_to_ui_tx, text, result, true).await;
            }
            Outcome::Superseded => {
                state.status.corrections.superseded.fetch_add(1, Ordering::Relaxed);
            }
        }
    });
}

async fn apply(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    original: String,
    result: CorrectionResult,
    degraded: bool,
) {
    let segments = markup::segment(&result.corrected_text, &result.untranslatable_words);
    let view = CorrectionView {
        original,
        corrected_text: result.corrected_text,
        is_translated: result.is_translated,
        untranslatable_words: result.untranslatable_words,
        segments,
    };

    *state.last_view.write().await = Some(view.clone());

    if degraded
        && let Err(e) = app_to_ui_tx
            .send(AppEvent::Notice(FAILURE_NOTICE.to_string()))
            .await
    {
        tracing::error!("failed to send failure notice: {e}");
    }

    if let Err(e) = app_to_ui_tx.send(AppEvent::ShowCorrection(view)).await {
        tracing::error!("failed to send correction to ui: {e}");
    }
    if let Err(e) = app_to_ui_tx.send(AppEvent::Busy(false)).await {
        tracing::error!("failed to clear busy: {e}");
    }
}
