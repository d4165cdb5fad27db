use std::{
    sync::{
        atomic::{
            AtomicU64,
            Ordering,
        },
        Arc,
    },
    time::{
        Duration,
        Instant,
    },
};

use tokio::time::sleep;

use super::session::OverlaySession;
use crate::{
    core::{
        OverlayConfig,
        Viewport,
        WordItem,
        WordriftError,
    },
    presenter::Presenter,
    server::{
        Command,
        CommandHandler,
        CommandServer,
        OutboundEvent,
    },
    track::{
        LaneBand,
        TrackScheduler,
    },
};

/// Seconds the example panel stays up before it auto-hides.
pub const EXAMPLE_HIDE_SECS: u64 = 5;

// Card width estimate, matching the rendered card: per-glyph advance
// plus horizontal padding.
const ASCII_ADVANCE: f64 = 0.62;
const WIDE_ADVANCE: f64 = 1.0;
const CARD_PADDING_PX: f64 = 32.0;
const TRANSLATION_FONT_DELTA: f64 = 3.0;

/// The scrolling caption session: every interval the deck dispenses a
/// word, the scheduler grants a lane (or the word is dropped) and the
/// Presenter animates the item across the viewport.
#[derive(Clone)]
pub struct DanmuOverlay {
    session: OverlaySession,
    // Guards the deferred example-hide; a newer activation or a stop
    // supersedes the stale sleeper.
    example_generation: Arc<AtomicU64>,
}

impl DanmuOverlay {
    pub fn new(presenter: Arc<dyn Presenter>, viewport: Viewport) -> Self {
        DanmuOverlay {
            session: OverlaySession::new("Danmu", presenter, viewport),
            example_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn session(&self) -> &OverlaySession {
        &self.session
    }

    pub fn stop(&self) {
        self.session.stop.trigger();
    }

    pub async fn run(&self, port: u16) -> Result<(), WordriftError> {
        let driver = tokio::spawn(spawn_loop(self.clone()));

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

    /// One spawn step: dispense a word, ask for a lane, instruct the
    /// Presenter. No free lane drops the item silently — it is still
    /// consumed for rotation purposes and never retried.
    pub fn tick(&self) {
        let spawned = {
            let mut state = self.session.state.lock().unwrap();
            if state.paused {
                return;
            }
            let Some(item) = state.deck.next() else {
                return;
            };

            let width = estimate_item_width(&item, &state.config);
            let band = LaneBand::from_config(&state.config, &state.viewport);
            let speed = state.config.speed;

            match state.tracks.acquire(Instant::now(), &band, width, speed) {
                Some(placement) => {
                    let duration =
                        TrackScheduler::transit_seconds(state.viewport.width, width, speed);
                    Some((item, placement, duration))
                }
                None => {
                    println!("[Danmu] No free lane, skipping: {}", item.word);
                    None
                }
            }
        };

        if let Some((item, placement, duration)) = spawned {
            self.session.presenter.spawn_moving(&item, placement.lane, placement.top_y, duration);
        }
    }

    /// Single click on a danmu: show the example panel, then hide it
    /// after `EXAMPLE_HIDE_SECS` unless a newer activation took over.
    pub fn on_item_activated(&self, word: &str) {
        let item = self.session.state.lock().unwrap().deck.find(word).cloned();
        let Some(item) = item else {
            return;
        };

        self.session.presenter.show_example(&item);

        let generation = self.example_generation.fetch_add(1, Ordering::SeqCst) + 1;
        let overlay = self.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = overlay.session.stop.cancelled() => return,
                _ = sleep(Duration::from_secs(EXAMPLE_HIDE_SECS)) => {}
            }
            if overlay.example_generation.load(Ordering::SeqCst) == generation {
                overlay.session.presenter.hide_example();
            }
        });
    }

    /// Double click: the word is mastered. Removed from the deck and
    /// reported back to the controller.
    pub fn on_item_double_activated(&self, word: &str) {
        self.session.state.lock().unwrap().deck.remove_by_word(word);
        self.session.events.send(&OutboundEvent::WordMastered { word: word.to_string() });
        println!("[Danmu] Marked as mastered: {}", word);
    }
}

async fn spawn_loop(overlay: DanmuOverlay) {
    loop {
        let interval = overlay.session.interval_seconds();
        tokio::select! {
            _ = overlay.session.stop.cancelled() => break,
            _ = sleep(Duration::from_secs_f64(interval)) => overlay.tick(),
        }
    }
}

impl CommandHandler for DanmuOverlay {
    fn handle_command(&self, command: Command) {
        match command {
            Command::Config { config } => self.session.apply_config(&config),
            Command::Words { words } => {
                self.session.load_deck(words);
                // First item goes up right away; the driver continues
                // from the next tick.
                self.tick();
            }
            Command::Pause => self.session.set_paused(true),
            Command::Resume => self.session.set_paused(false),
            Command::Stop => {
                println!("[Danmu] Stop requested");
                self.session.stop.trigger();
            }
            Command::AddSticker { .. } | Command::LoadSpace { .. } | Command::Clear => {
                println!("[Danmu] Sticker command ignored in danmu mode");
            }
            Command::Unrecognized => {}
        }
    }
}

/// Width the rendered card will take, estimated from glyph counts: the
/// core has no text layout, so ASCII glyphs count as a fraction of the
/// font size and CJK-style glyphs as a full em.
pub fn estimate_item_width(item: &WordItem, config: &OverlayConfig) -> f64 {
    let word_width = text_width(&item.word, config.font_size);

    let translation_width = match (&item.translation, config.show_translation) {
        (Some(translation), true) => {
            text_width(translation, config.font_size - TRANSLATION_FONT_DELTA)
        }
        _ => 0.0,
    };

    word_width.max(translation_width) + CARD_PADDING_PX
}

fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars()
        .map(|c| if c.is_ascii() { ASCII_ADVANCE * font_size } else { WIDE_ADVANCE * font_size })
        .sum()
}
