use std::sync::Arc;

use tokio::sync::watch;

/// Cooperative cancellation shared by a session's accept loop, its
/// connection read loop and its periodic drivers. Cloning hands out
/// another handle to the same signal.
#[derive(Clone)]
pub struct StopToken {
    sender: Arc<watch::Sender<bool>>,
}

impl StopToken {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        StopToken { sender: Arc::new(sender) }
    }

    pub fn trigger(&self) {
        let _ = self.sender.send(true);
    }

    pub fn is_stopped(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolves once the token is triggered. Used inside `select!` to
    /// interrupt in-flight accepts, reads and driver sleeps.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        if *receiver.borrow() {
            return;
        }
        while receiver.changed().await.is_ok() {
            if *receiver.borrow() {
                return;
            }
        }
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}
