use std::io::{self, Write};
use std::sync::Arc;

use kanal::AsyncReceiver;
use quill_config::Config;
use quill_types::{AppEvent, CorrectionView, Segment, UiEvent};
use termion::{color, style};
use tokio::sync::RwLock;

/// Terminal rendering of app events: corrected text with flagged terms
/// highlighted, a translated badge, busy and copy feedback, notices.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let (use_color, show_terms) = {
        let config = config.read().await;
        (config.ui.color, config.ui.show_terms)
    };

    loop {
        let event = app_to_ui_rx.recv().await?;
        match event {
            AppEvent::ShowCorrection(view) => render_view(&view, use_color, show_terms)?,
            AppEvent::Busy(true) => {
                eprintln!("(processing...)");
            }
            AppEvent::Busy(false) => {}
            AppEvent::Copied(true) => {
                println!("copied to clipboard");
            }
            AppEvent::Copied(false) => {
                eprintln!("copy failed");
            }
            AppEvent::Notice(message) => render_notice(&message, use_color),
            AppEvent::UiEvent(UiEvent::Close) => {
                tracing::info!("ui close requested");
                break;
            }
            AppEvent::UiEvent(_) | AppEvent::ConfigChanged => {}
            AppEvent::TextChanged { .. } | AppEvent::CopyOutput => {
                // backend-bound events, nothing to render
            }
        }
    }

    Ok(())
}

fn render_view(view: &CorrectionView, use_color: bool, show_terms: bool) -> anyhow::Result<()> {
    let mut stdout = io::stdout();

    if view.is_empty() {
        writeln!(stdout)?;
        stdout.flush()?;
        return Ok(());
    }

    let mut line = String::new();
    for segment in &view.segments {
        match segment {
            Segment::Plain(text) => line.push_str(text),
            Segment::Flagged(text) => {
                if use_color {
                    line.push_str(&format!(
                        "{}{}{}{}",
                        color::Fg(color::Red),
                        style::Underline,
                        text,
                        style::Reset
                    ));
                } else {
                    line.push_str(text);
                }
            }
        }
    }

    writeln!(stdout, "-> {line}")?;
    if view.is_translated {
        writeln!(stdout, "   [translated to English]")?;
    }
    if show_terms && !view.untranslatable_words.is_empty() {
        writeln!(stdout, "   unsure about: {}", view.untranslatable_words.join(", "))?;
    }
    stdout.flush()?;

    Ok(())
}

fn render_notice(message: &str, use_color: bool) {
    if use_color {
        eprintln!(
            "{}{}{}",
            color::Fg(color::Yellow),
            message,
            style::Reset
        );
    } else {
        eprintln!("{message}");
    }
}
