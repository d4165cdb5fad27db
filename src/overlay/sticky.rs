use std::sync::Arc;

use super::session::OverlaySession;
use crate::{
    core::{
        StickerSpec,
        Viewport,
        WordriftError,
    },
    presenter::Presenter,
    server::{
        Command,
        CommandHandler,
        CommandServer,
        OutboundEvent,
    },
};

/// The sticky-note session: no periodic driver, only explicit commands
/// and Presenter-originated drag/dismiss events.
#[derive(Clone)]
pub struct StickyOverlay {
    session: OverlaySession,
}

impl StickyOverlay {
    pub fn new(presenter: Arc<dyn Presenter>, viewport: Viewport) -> Self {
        StickyOverlay { session: OverlaySession::new("Sticky", presenter, viewport) }
    }

    pub fn session(&self) -> &OverlaySession {
        &self.session
    }

    pub fn stop(&self) {
        self.session.stop.trigger();
    }

    pub async fn run(&self, port: u16) -> Result<(), WordriftError> {
        let server = CommandServer::new(
            self.session.tag,
            Arc::new(self.clone()),
            self.session.events.clone(),
            self.session.stop.clone(),
        );
        server.serve(port).await
    }

    fn add_sticker(&self, spec: StickerSpec) {
        let stored = self.session.state.lock().unwrap().stickers.add_or_update(spec);
        self.session.presenter.place_sticker(&stored);
    }

    fn load_space(&self, stickers: Vec<StickerSpec>) {
        self.session.state.lock().unwrap().stickers.clear();
        self.session.presenter.clear_all_stickers();

        println!("[Sticky] Loading space with {} stickers", stickers.len());
        for spec in stickers {
            self.add_sticker(spec);
        }
    }

    fn clear(&self) {
        self.session.state.lock().unwrap().stickers.clear();
        self.session.presenter.clear_all_stickers();
        println!("[Sticky] Cleared all stickers");
    }

    /// Drag completion from the Presenter, carrying the latest
    /// coordinates. Reported back to the controller so it can persist
    /// the layout for its own session.
    pub fn on_sticker_drag_end(&self, word: &str, x: f64, y: f64) {
        let known = self.session.state.lock().unwrap().stickers.update_position(word, x, y);
        if known {
            self.session.events.send(&OutboundEvent::PositionUpdate {
                word: word.to_string(),
                x,
                y,
            });
        }
    }

    /// User dismissal (right-click) from the Presenter.
    pub fn on_sticker_dismissed(&self, word: &str) {
        let removed = self.session.state.lock().unwrap().stickers.remove(word).is_some();
        if removed {
            self.session.presenter.remove_sticker(word);
            self.session.events.send(&OutboundEvent::StickerRemoved { word: word.to_string() });
        }
    }
}

impl CommandHandler for StickyOverlay {
    fn handle_command(&self, command: Command) {
        match command {
            Command::AddSticker { sticker } => self.add_sticker(sticker),
            Command::LoadSpace { stickers } => self.load_space(stickers),
            Command::Clear => self.clear(),
            Command::Stop => {
                println!("[Sticky] Stop requested");
                self.session.stop.trigger();
            }
            Command::Config { .. }
            | Command::Words { .. }
            | Command::Pause
            | Command::Resume => {
                println!("[Sticky] Rotation command ignored in sticky mode");
            }
            Command::Unrecognized => {}
        }
    }
}
