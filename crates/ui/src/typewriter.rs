use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Default per-character delay, matching a comfortable reading pace.
const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// Character-by-character text reveal.
///
/// A plain timed sequence the host can await, or spawn and cancel when a new
/// question interrupts the old reveal. Injected into whoever needs it rather
/// than reached through a global.
#[derive(Debug, Clone, Copy)]
pub struct Typewriter {
    interval: Duration,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self {
            interval: DEFAULT_CHAR_INTERVAL,
        }
    }
}

impl Typewriter {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reveal `text` one character at a time, calling `on_update` with the
    /// partial text after each character.
    ///
    /// Cancellation is dropping the future (or aborting the task wrapping
    /// it); the sink simply stops receiving updates mid-text.
    pub async fn reveal<F>(&self, text: &str, mut on_update: F)
    where
        F: FnMut(&str),
    {
        let mut shown = String::with_capacity(text.len());
        for ch in text.chars() {
            shown.push(ch);
            on_update(&shown);
            sleep(self.interval).await;
        }
    }

    /// Spawn a reveal as a background task, returning a handle the host keeps
    /// so a newly displayed question can cancel the previous reveal.
    #[must_use]
    pub fn spawn_reveal<F>(&self, text: impl Into<String>, on_update: F) -> RevealTask
    where
        F: FnMut(&str) + Send + 'static,
    {
        let typewriter = *self;
        let text = text.into();
        let handle = tokio::spawn(async move {
            let mut on_update = on_update;
            typewriter.reveal(&text, &mut on_update).await;
        });
        RevealTask { handle }
    }
}

/// Handle to an in-flight spawned reveal.
#[derive(Debug)]
pub struct RevealTask {
    handle: JoinHandle<()>,
}

impl RevealTask {
    /// Stop the reveal where it is.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reveal to run to completion or cancellation.
    pub async fn join(self) {
        // Abort shows up as a JoinError; both endings are fine for a reveal.
        let _ = self.handle.await;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::time::{Instant, advance};

    #[tokio::test(start_paused = true)]
    async fn reveals_one_character_per_tick() {
        let typewriter = Typewriter::new(Duration::from_millis(10));
        let mut updates = Vec::new();

        let started = Instant::now();
        typewriter
            .reveal("abc", |partial| updates.push(partial.to_string()))
            .await;

        assert_eq!(updates, ["a", "ab", "abc"]);
        assert_eq!(started.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_text_completes_without_updates() {
        let typewriter = Typewriter::default();
        let mut updates = 0;
        typewriter.reveal("", |_| updates += 1).await;
        assert_eq!(updates, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_reveal_stops_mid_text() {
        let typewriter = Typewriter::new(Duration::from_millis(10));
        let seen = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&seen);

        let task = typewriter.spawn_reveal("abcdef", move |partial| {
            *sink.lock().unwrap() = partial.to_string();
        });

        // Let two characters through, then interrupt.
        advance(Duration::from_millis(15)).await;
        tokio::task::yield_now().await;
        task.cancel();
        task.join().await;

        let shown = seen.lock().unwrap().clone();
        assert!(shown.len() < 6, "reveal should have been cut short: {shown:?}");
    }
}
