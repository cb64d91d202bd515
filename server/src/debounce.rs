use std::{future::Future, sync::Mutex, time::Duration};

use tokio::{task::JoinHandle, time::sleep};

/// Runs only the last of a burst of effects, once the delay has elapsed
/// with no newer call.
///
/// Used to keep analytics from firing on every keystroke. Scheduling is a
/// plain task spawn, so the caller's synchronous path is never delayed.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Schedule `effect` to run after the delay, cancelling whatever was
    /// still pending from an earlier call.
    pub fn call<F>(&self, effect: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            effect.await;
        });

        let mut pending = self.pending.lock().unwrap();
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }
}
