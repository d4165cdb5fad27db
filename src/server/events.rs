use std::sync::{
    Arc,
    Mutex,
};

use tokio::sync::mpsc;

use super::types::OutboundEvent;

/// Outbound path to the controlling peer. Holds at most one attached
/// sender — the current connection — and delivers best-effort: with no
/// peer, a full channel or a closed channel the event is logged and
/// dropped, never retried.
#[derive(Clone)]
pub struct EventBus {
    tag: &'static str,
    sender: Arc<Mutex<Option<mpsc::Sender<String>>>>,
}

impl EventBus {
    pub fn new(tag: &'static str) -> Self {
        EventBus { tag, sender: Arc::new(Mutex::new(None)) }
    }

    /// Attaches the current connection's outbound channel, replacing
    /// whatever connection came before it.
    pub fn attach(&self, sender: mpsc::Sender<String>) {
        *self.sender.lock().unwrap() = Some(sender);
    }

    pub fn detach(&self) {
        *self.sender.lock().unwrap() = None;
    }

    pub fn send(&self, event: &OutboundEvent) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("[{}] Failed to encode event: {}", self.tag, e);
                return;
            }
        };

        let sender = self.sender.lock().unwrap().clone();
        match sender {
            Some(sender) => {
                if let Err(e) = sender.try_send(json) {
                    eprintln!("[{}] Dropped outbound event: {}", self.tag, e);
                }
            }
            None => {
                println!("[{}] No controller attached, dropping event: {}", self.tag, json);
            }
        }
    }
}
