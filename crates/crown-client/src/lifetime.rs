//! Screen lifetimes.
//!
//! Each mounted screen owns a [`ScreenLifetime`]; the shell keeps a clone and
//! tears it down when the user leaves the tab.  Capability calls run through
//! [`ScreenLifetime::guard`] so a picker or camera result that arrives after
//! teardown is dropped instead of mutating a screen nobody is looking at.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct ScreenLifetime {
    torn_down: Arc<watch::Sender<bool>>,
}

impl ScreenLifetime {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            torn_down: Arc::new(tx),
        }
    }

    pub fn is_active(&self) -> bool {
        !*self.torn_down.borrow()
    }

    /// Irreversible. Pending guarded calls resolve to `None`.
    pub fn teardown(&self) {
        self.torn_down.send_replace(true);
    }

    /// Run `fut` unless the screen is torn down first. A result that
    /// completes after teardown is discarded as well.
    pub async fn guard<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        if !self.is_active() {
            return None;
        }

        let mut rx = self.torn_down.subscribe();

        tokio::select! {
            out = fut => {
                if self.is_active() {
                    Some(out)
                } else {
                    None
                }
            }
            _ = rx.wait_for(|torn| *torn) => None,
        }
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}
