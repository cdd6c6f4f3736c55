use std::sync::Arc;

use kanal::AsyncSender;
use quill_types::{AppEvent, TextSource, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Input watcher: stdin lines are the typing surface, the clipboard
/// watcher is optional. `:copy` and `:quit` lines act as the copy button
/// and close control.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let watch_clipboard = {
        let config = state.config.read().await;
        config.ui.watch_clipboard
    };

    if watch_clipboard {
        tracing::info!("starting clipboard watcher");
        let tx = event_tx.clone();
        let cancel_clone = cancel.clone();

        tokio::spawn(async move {
            tokio::select! {
                result = quill_io::clipboard::watch_clipboard(move |text| {
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Err(e) = tx.send(AppEvent::TextChanged {
                            text,
                            source: TextSource::Clipboard,
                        }).await {
                            tracing::error!("failed to forward clipboard text: {e}");
                        }
                    });
                }) => {
                    if let Err(e) = result {
                        tracing::error!("clipboard watcher error: {e}");
                    }
                }
                _ = cancel_clone.cancelled() => {
                    tracing::info!("clipboard watcher stopping");
                }
            }
        });
    }

    tracing::info!("reading input from stdin (:copy copies, :quit exits)");

    let tx = event_tx.clone();
    let quit = cancel.clone();
    tokio::select! {
        result = quill_io::stdin::read_lines(move |line| {
            let event = if line.trim() == ":quit" {
                quit.cancel();
                AppEvent::UiEvent(UiEvent::Close)
            } else if line.trim() == ":copy" {
                AppEvent::CopyOutput
            } else {
                AppEvent::TextChanged {
                    text: line,
                    source: TextSource::Stdin,
                }
            };
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Err(e) = tx.send(event).await {
                    tracing::error!("failed to forward stdin input: {e}");
                }
            });
        }) => {
            if let Err(e) = result {
                tracing::error!("stdin reader error: {e}");
            }
        }
        _ = cancel.cancelled() => {
            tracing::info!("input watcher stopping");
        }
    }

    Ok(())
}
