pub mod connection;
pub mod events;
pub mod framer;
pub mod listener;
pub mod types;

pub use events::EventBus;
pub use framer::WireFramer;
pub use listener::CommandServer;
pub use types::{
    Command,
    OutboundEvent,
};

/// Loopback control ports, one per overlay mode.
pub const DANMU_PORT: u16 = 9527;
pub const CAROUSEL_PORT: u16 = 9528;
pub const STICKY_PORT: u16 = 9529;

/// Dispatch seam between the wire and an overlay session. The server
/// decodes; the session decides what a command means for its mode.
pub trait CommandHandler: Send + Sync {
    fn handle_command(&self, command: Command);
}
