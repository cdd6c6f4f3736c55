use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Debounce gate owned by the corrector instance.
///
/// Each `issue` call supersedes every earlier window; the sequence number
/// it hands out doubles as the guard against late responses. A waiter
/// whose window was superseded resolves `None` from `settle` instead of
/// hanging, and a response arriving for a stale ticket fails the
/// `is_current` check.
pub struct Debouncer {
    quiet: Duration,
    latest: AtomicU64,
}

/// Sequence number for one debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            latest: AtomicU64::new(0),
        }
    }

    /// Open a new window, invalidating any pending one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Wait out the quiet interval. `None` means a newer window opened
    /// while this one was waiting.
    pub async fn settle(&self, ticket: Ticket) -> Option<Ticket> {
        tokio::time::sleep(self.quiet).await;
        self.is_current(ticket).then_some(ticket)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
