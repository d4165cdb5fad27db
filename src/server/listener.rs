use std::sync::Arc;

use tokio::net::TcpListener;

use super::{
    connection::handle_connection,
    events::EventBus,
    CommandHandler,
};
use crate::core::{
    StopToken,
    WordriftError,
};

/// Owns the listening socket for one overlay session. Accepts a single
/// control connection at a time and serves it to completion before
/// accepting again; pending peers wait in the OS backlog.
pub struct CommandServer {
    tag: &'static str,
    handler: Arc<dyn CommandHandler>,
    events: EventBus,
    stop: StopToken,
}

impl CommandServer {
    pub fn new(
        tag: &'static str,
        handler: Arc<dyn CommandHandler>,
        events: EventBus,
        stop: StopToken,
    ) -> Self {
        CommandServer { tag, handler, events, stop }
    }

    /// Binds the loopback port and serves until the stop token fires.
    /// Failing to bind is the one fatal transport error in a session.
    pub async fn serve(self, port: u16) -> Result<(), WordriftError> {
        let tag = self.tag;
        let listener = TcpListener::bind(("127.0.0.1", port)).await.map_err(|e| {
            WordriftError::Custom(format!("[{}] Failed to bind port {}: {}", tag, port, e))
        })?;
        self.serve_on(listener).await
    }

    /// Serves on an already-bound listener. Tests bind port 0 and pass
    /// the listener in to learn the ephemeral address first.
    pub async fn serve_on(self, listener: TcpListener) -> Result<(), WordriftError> {
        println!("[{}] Listening on {}", self.tag, listener.local_addr()?);

        loop {
            let accepted = tokio::select! {
                _ = self.stop.cancelled() => break,
                accepted = listener.accept() => accepted,
            };

            match accepted {
                Ok((stream, addr)) => {
                    println!("[{}] Controller connected from {}", self.tag, addr);
                    if let Err(e) = handle_connection(
                        stream,
                        addr,
                        self.tag,
                        self.handler.clone(),
                        self.events.clone(),
                        self.stop.clone(),
                    )
                    .await
                    {
                        eprintln!("[{}] Connection error from {}: {:?}", self.tag, addr, e);
                    }
                }
                Err(e) => {
                    eprintln!("[{}] Accept error: {}", self.tag, e);
                }
            }
        }

        println!("[{}] Server stopped", self.tag);
        Ok(())
    }
}
