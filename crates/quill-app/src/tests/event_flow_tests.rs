use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use quill_config::Config;
use quill_core::heuristic::Thresholds;
use quill_core::pipeline::Corrector;
use quill_corrector::{CorrectError, CorrectionModel, ProviderMetadata};
use quill_types::{AppEvent, CorrectionView, Segment, TextSource};
use tokio::time::timeout;

use crate::events::copy_output::handle_copy;
use crate::events::text_input::handle_text_changed;
use crate::state::AppState;

const QUIET: Duration = Duration::from_millis(50);
const WAIT: Duration = Duration::from_secs(2);

struct EchoModel {
    calls: AtomicUsize,
}

#[async_trait]
impl CorrectionModel for EchoModel {
    async fn correct(&self, text: &str) -> Result<String, CorrectError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{text} (corrected)"))
    }

    async fn check(&self) -> Result<(), CorrectError> {
        Ok(())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "echo".to_string(),
            requires_api_key: false,
        }
    }
}

struct FailingModel;

#[async_trait]
impl CorrectionModel for FailingModel {
    async fn correct(&self, _text: &str) -> Result<String, CorrectError> {
        Err(CorrectError::Api("simulated outage".to_string()))
    }

    async fn check(&self) -> Result<(), CorrectError> {
        Err(CorrectError::Api("simulated outage".to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "failing".to_string(),
            requires_api_key: false,
        }
    }
}

fn test_harness(
    model: Arc<dyn CorrectionModel>,
) -> (
    Arc<AppState>,
    Arc<Corrector>,
    AsyncSender<AppEvent>,
    AsyncReceiver<AppEvent>,
) {
    let state = Arc::new(AppState::new(Config::default()));
    let corrector = Arc::new(Corrector::new(model, QUIET, Thresholds::default()));
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();
    (state, corrector, tx, rx)
}

/// Drain UI events until Busy(false), which closes every applied outcome.
async fn drain_until_idle(rx: &AsyncReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    loop {
        let event = timeout(WAIT, rx.recv())
            .await
            .expect("timed out waiting for ui event")
            .expect("channel closed");
        let is_idle = matches!(event, AppEvent::Busy(false));
        events.push(event);
        if is_idle {
            return events;
        }
    }
}

#[tokio::test]
async fn failure_emits_one_notice_and_the_original_text() {
    let (state, corrector, tx, rx) = test_harness(Arc::new(FailingModel));

    handle_text_changed(
        state.clone(),
        corrector,
        tx,
        "helo wrld".to_string(),
        TextSource::Manual,
    );

    let events = drain_until_idle(&rx).await;

    let notices = events
        .iter()
        .filter(|e| matches!(e, AppEvent::Notice(_)))
        .count();
    assert_eq!(notices, 1);

    let view = events
        .iter()
        .find_map(|e| match e {
            AppEvent::ShowCorrection(view) => Some(view.clone()),
            _ => None,
        })
        .expect("no correction shown");
    assert_eq!(view.corrected_text, "helo wrld");
    assert!(!view.is_translated);
    assert!(view.untranslatable_words.is_empty());

    assert_eq!(state.status.corrections.failed.load(Ordering::Relaxed), 1);
}

#[tokio::test]
async fn blank_input_clears_the_display_without_going_busy() {
    let model = Arc::new(EchoModel {
        calls: AtomicUsize::new(0),
    });
    let (state, corrector, tx, rx) = test_harness(model.clone());

    handle_text_changed(state, corrector, tx, "   ".to_string(), TextSource::Stdin);

    let events = drain_until_idle(&rx).await;

    assert!(!events.iter().any(|e| matches!(e, AppEvent::Busy(true))));
    let view = events
        .iter()
        .find_map(|e| match e {
            AppEvent::ShowCorrection(view) => Some(view.clone()),
            _ => None,
        })
        .expect("no correction shown");
    assert!(view.is_empty());
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn rapid_inputs_render_only_the_last_value() {
    let model = Arc::new(EchoModel {
        calls: AtomicUsize::new(0),
    });
    let (state, corrector, tx, rx) = test_harness(model.clone());

    for text in ["first", "second", "third"] {
        handle_text_changed(
            state.clone(),
            corrector.clone(),
            tx.clone(),
            text.to_string(),
            TextSource::Stdin,
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let events = drain_until_idle(&rx).await;

    let views: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            AppEvent::ShowCorrection(view) => Some(view.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].corrected_text, "third (corrected)");
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.status.corrections.superseded.load(Ordering::Relaxed), 2);
}

#[tokio::test]
async fn copy_with_nothing_displayed_emits_no_event() {
    let (state, _corrector, tx, rx) = test_harness(Arc::new(FailingModel));

    handle_copy(state, &tx).await.expect("copy handler failed");

    assert!(timeout(Duration::from_millis(100), rx.recv()).await.is_err());
}

#[tokio::test]
async fn copy_reports_an_outcome_for_a_displayed_view() {
    let (state, _corrector, tx, rx) = test_harness(Arc::new(FailingModel));

    let view = CorrectionView {
        original: "use foo plz".to_string(),
        corrected_text: "Use foo please".to_string(),
        is_translated: false,
        untranslatable_words: vec!["foo".to_string()],
        segments: vec![
            Segment::Plain("Use ".to_string()),
            Segment::Flagged("foo".to_string()),
            Segment::Plain(" please".to_string()),
        ],
    };
    *state.last_view.write().await = Some(view);

    handle_copy(state, &tx).await.expect("copy handler failed");

    // headless environments may not expose a clipboard; either way the
    // outcome must be reported and must never error
    let event = timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for copy outcome")
        .expect("channel closed");
    assert!(matches!(event, AppEvent::Copied(_)));
}
