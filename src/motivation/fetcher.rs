//! Fetch-once-on-init motivation loading
//!
//! At startup the view spawns a single task that asks for a greeting, then for
//! a workout suggestion. Results arrive over a channel the view polls each frame.
//! Nothing re-triggers the task afterwards.

use std::sync::mpsc::{channel, Receiver, Sender};

use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use super::{
    MotivationClient, GREETING_PLACEHOLDER, MOTIVATION_FALLBACKS, SUGGESTION_FALLBACKS,
};

/// Inputs for the startup requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotivationRequest {
    pub name: String,
    pub level: u32,
    pub last_workout_type: String,
    pub history: String,
}

/// A finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotivationUpdate {
    Greeting(String),
    Suggestion(String),
}

/// Receiving end of the startup fetch, with the latest values
pub struct MotivationFetcher {
    rx: Receiver<MotivationUpdate>,
    greeting: String,
    greeting_received: bool,
    suggestion: Option<String>,
}

impl MotivationFetcher {
    /// Start the one-time fetch on `runtime`
    pub fn spawn(runtime: &Handle, client: MotivationClient, request: MotivationRequest) -> Self {
        let (tx, rx) = channel();
        runtime.spawn(fetch_once(client, request, tx));

        Self {
            rx,
            greeting: GREETING_PLACEHOLDER.to_string(),
            greeting_received: false,
            suggestion: None,
        }
    }

    /// Drain finished requests (non-blocking). Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(update) = self.rx.try_recv() {
            match update {
                MotivationUpdate::Greeting(text) => {
                    self.greeting = text;
                    self.greeting_received = true;
                }
                MotivationUpdate::Suggestion(text) => self.suggestion = Some(text),
            }
            changed = true;
        }
        changed
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Both requests have been delivered
    pub fn is_complete(&self) -> bool {
        self.greeting_received && self.suggestion.is_some()
    }
}

/// Run the two requests in order. Each blocking call gets its own blocking thread.
async fn fetch_once(client: MotivationClient, request: MotivationRequest, tx: Sender<MotivationUpdate>) {
    let greeting_client = client.clone();
    let MotivationRequest {
        name,
        level,
        last_workout_type,
        history,
    } = request;

    let greeting = tokio::task::spawn_blocking(move || {
        greeting_client.workout_motivation(&name, level, &last_workout_type)
    })
    .await
    .unwrap_or_else(|e| {
        warn!("Greeting task failed: {}", e);
        MOTIVATION_FALLBACKS.failed.to_string()
    });

    if tx.send(MotivationUpdate::Greeting(greeting)).is_err() {
        debug!("Motivation receiver dropped, discarding results");
        return;
    }

    let suggestion = tokio::task::spawn_blocking(move || client.suggest_next_workout(&history))
        .await
        .unwrap_or_else(|e| {
            warn!("Suggestion task failed: {}", e);
            SUGGESTION_FALLBACKS.failed.to_string()
        });

    if tx.send(MotivationUpdate::Suggestion(suggestion)).is_err() {
        debug!("Motivation receiver dropped, discarding suggestion");
        return;
    }

    info!("Motivation loaded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motivation::tests::ScriptedGenerator;
    use std::sync::Arc;
    use std::time::Duration;

    fn request() -> MotivationRequest {
        MotivationRequest {
            name: "Guerreiro".to_string(),
            level: 5,
            last_workout_type: "Musculação".to_string(),
            history: "Musculação, Corrida, Yoga".to_string(),
        }
    }

    async fn wait_complete(fetcher: &mut MotivationFetcher) {
        for _ in 0..200 {
            fetcher.poll();
            if fetcher.is_complete() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("fetcher did not complete");
    }

    #[tokio::test]
    async fn test_starts_with_placeholders() {
        let generator = Arc::new(ScriptedGenerator::replying("Foco!"));
        let fetcher = MotivationFetcher::spawn(
            &Handle::current(),
            MotivationClient::new(generator, "m"),
            request(),
        );
        assert_eq!(fetcher.greeting(), GREETING_PLACEHOLDER);
        assert_eq!(fetcher.suggestion(), None);
        assert!(!fetcher.is_complete());
    }

    #[tokio::test]
    async fn test_delivers_both_lines_once() {
        let generator = Arc::new(ScriptedGenerator::replying("Foco!"));
        let mut fetcher = MotivationFetcher::spawn(
            &Handle::current(),
            MotivationClient::new(generator.clone(), "m"),
            request(),
        );
        wait_complete(&mut fetcher).await;

        assert_eq!(fetcher.greeting(), "Foco!");
        assert_eq!(fetcher.suggestion(), Some("Foco!"));

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!fetcher.poll());
        let prompts = generator.prompts.lock().expect("lock");
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].1.contains("Guerreiro"));
        assert!(prompts[1].1.contains("Musculação, Corrida, Yoga"));
    }

    #[tokio::test]
    async fn test_failures_become_fallbacks() {
        let generator = Arc::new(ScriptedGenerator::failing());
        let mut fetcher = MotivationFetcher::spawn(
            &Handle::current(),
            MotivationClient::new(generator, "m"),
            request(),
        );
        wait_complete(&mut fetcher).await;

        assert_eq!(fetcher.greeting(), MOTIVATION_FALLBACKS.failed);
        assert_eq!(fetcher.suggestion(), Some(SUGGESTION_FALLBACKS.failed));
    }
}
