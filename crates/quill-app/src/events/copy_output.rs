use std::sync::Arc;

use kanal::AsyncSender;
use quill_core::markup;
use quill_types::AppEvent;

use crate::state::AppState;

/// Put the marker-free rendering of the current view on the clipboard.
/// Clipboard failures are logged, never fatal.
pub async fn handle_copy(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let view = state.last_view.read().await.clone();
    let Some(view) = view else {
        tracing::debug!("copy requested with nothing to copy");
        return Ok(());
    };
    if view.is_empty() {
        return Ok(());
    }

    let payload = markup::plain_text(&view.segments);
    let copied = tokio::task::spawn_blocking(move || quill_io::clipboard::copy_text(&payload)).await;

    let ok = match copied {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::error!("clipboard write failed: {e}");
            false
        }
        Err(e) => {
            tracing::error!("clipboard task panicked: {e}");
            false
        }
    };

    app_to_ui_tx.send(AppEvent::Copied(ok)).await?;
    Ok(())
}
