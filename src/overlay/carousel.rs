use std::{
    sync::Arc,
    time::Duration,
};

use tokio::time::sleep;

use super::session::OverlaySession;
use crate::{
    core::{
        Viewport,
        WordriftError,
    },
    presenter::Presenter,
    server::{
        Command,
        CommandHandler,
        CommandServer,
    },
};

/// The rotating flashcard session: every interval the deck advances and
/// the Presenter fades to the next word.
#[derive(Clone)]
pub struct CarouselOverlay {
    session: OverlaySession,
}

impl CarouselOverlay {
    pub fn new(presenter: Arc<dyn Presenter>, viewport: Viewport) -> Self {
        CarouselOverlay { session: OverlaySession::new("Carousel", presenter, viewport) }
    }

    pub fn session(&self) -> &OverlaySession {
        &self.session
    }

    pub fn stop(&self) {
        self.session.stop.trigger();
    }

    /// Runs the rotation driver and the command server until the
    /// session is stopped.
    pub async fn run(&self, port: u16) -> Result<(), WordriftError> {
        let driver = tokio::spawn(rotation_loop(self.clone()));

        let server = CommandServer::new(
            self.session.tag,
            Arc::new(self.clone()),
            self.session.events.clone(),
            self.session.stop.clone(),
        );
        let result = server.serve(port).await;

        self.session.stop.trigger();
        let _ = driver.await;
        result
    }

    /// One rotation step. Also the single-click "next card" path.
    pub fn advance(&self) {
        let item = {
            let mut state = self.session.state.lock().unwrap();
            if state.paused {
                return;
            }
            state.deck.next()
        };

        if let Some(item) = item {
            self.session.presenter.transition_to(&item);
        }
    }

    pub fn on_item_activated(&self) {
        self.advance();
    }

    fn show_first(&self) {
        let first = self.session.state.lock().unwrap().deck.next();
        if let Some(first) = first {
            self.session.presenter.show_immediate(&first);
        }
    }
}

async fn rotation_loop(overlay: CarouselOverlay) {
    loop {
        let interval = overlay.session.interval_seconds();
        tokio::select! {
            _ = overlay.session.stop.cancelled() => break,
            _ = sleep(Duration::from_secs_f64(interval)) => overlay.advance(),
        }
    }
}

impl CommandHandler for CarouselOverlay {
    fn handle_command(&self, command: Command) {
        match command {
            Command::Config { config } => self.session.apply_config(&config),
            Command::Words { words } => {
                self.session.load_deck(words);
                self.show_first();
            }
            Command::Pause => self.session.set_paused(true),
            Command::Resume => self.session.set_paused(false),
            Command::Stop => {
                println!("[Carousel] Stop requested");
                self.session.stop.trigger();
            }
            Command::AddSticker { .. } | Command::LoadSpace { .. } | Command::Clear => {
                println!("[Carousel] Sticker command ignored in carousel mode");
            }
            Command::Unrecognized => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::WordItem,
        presenter::{
            PresenterCall,
            RecordingPresenter,
        },
    };

    fn overlay_with_recorder() -> (CarouselOverlay, RecordingPresenter) {
        let recorder = RecordingPresenter::new();
        let overlay = CarouselOverlay::new(Arc::new(recorder.clone()), Viewport::default());
        (overlay, recorder)
    }

    fn words(names: &[&str]) -> Vec<WordItem> {
        names.iter().map(|w| WordItem::new(*w)).collect()
    }

    #[test]
    fn words_command_displays_the_first_item_immediately() {
        let (overlay, recorder) = overlay_with_recorder();

        overlay.handle_command(Command::Words { words: words(&["cat"]) });

        assert_eq!(recorder.calls(), vec![PresenterCall::ShowImmediate("cat".into())]);
    }

    #[test]
    fn advance_transitions_through_the_deck() {
        let (overlay, recorder) = overlay_with_recorder();
        overlay.handle_command(Command::Words { words: words(&["cat"]) });

        overlay.advance();
        overlay.advance();

        let transitions = recorder
            .calls()
            .into_iter()
            .filter(|call| matches!(call, PresenterCall::TransitionTo(_)))
            .count();
        assert_eq!(transitions, 2);
    }

    #[test]
    fn pause_suppresses_rotation() {
        let (overlay, recorder) = overlay_with_recorder();
        overlay.handle_command(Command::Words { words: words(&["cat", "dog"]) });
        let baseline = recorder.calls().len();

        overlay.handle_command(Command::Pause);
        overlay.advance();
        assert_eq!(recorder.calls().len(), baseline);

        overlay.handle_command(Command::Resume);
        overlay.advance();
        assert_eq!(recorder.calls().len(), baseline + 1);
    }

    #[test]
    fn advance_on_an_empty_deck_is_a_noop() {
        let (overlay, recorder) = overlay_with_recorder();
        overlay.advance();
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn stop_command_triggers_the_session_token() {
        let (overlay, _recorder) = overlay_with_recorder();
        assert!(!overlay.session().stop.is_stopped());

        overlay.handle_command(Command::Stop);
        assert!(overlay.session().stop.is_stopped());
    }
}
