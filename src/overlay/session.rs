use std::sync::{
    Arc,
    Mutex,
};

use crate::{
    core::{
        ConfigPatch,
        OverlayConfig,
        StopToken,
        Viewport,
        WordItem,
    },
    deck::WordDeck,
    presenter::Presenter,
    server::EventBus,
    sticker::StickerSpace,
    track::TrackScheduler,
};

/// Everything a session mutates: config, deck, lanes, stickers, the
/// pause flag and the viewport. Guarded by one mutex — the single
/// mutation boundary between the command dispatcher and the drivers.
pub struct SessionState {
    pub config: OverlayConfig,
    pub deck: WordDeck,
    pub tracks: TrackScheduler,
    pub stickers: StickerSpace,
    pub paused: bool,
    pub viewport: Viewport,
}

impl SessionState {
    pub fn new(viewport: Viewport) -> Self {
        SessionState {
            config: OverlayConfig::default(),
            deck: WordDeck::new(),
            tracks: TrackScheduler::new(),
            stickers: StickerSpace::new(),
            paused: false,
            viewport,
        }
    }
}

/// Shared handles for one overlay session. Cloning is cheap; every
/// clone points at the same state, presenter, event bus and stop
/// signal. Presenter calls are always made after releasing the lock.
#[derive(Clone)]
pub struct OverlaySession {
    pub tag: &'static str,
    pub state: Arc<Mutex<SessionState>>,
    pub presenter: Arc<dyn Presenter>,
    pub events: EventBus,
    pub stop: StopToken,
}

impl OverlaySession {
    pub fn new(tag: &'static str, presenter: Arc<dyn Presenter>, viewport: Viewport) -> Self {
        OverlaySession {
            tag,
            state: Arc::new(Mutex::new(SessionState::new(viewport))),
            presenter,
            events: EventBus::new(tag),
            stop: StopToken::new(),
        }
    }

    pub fn apply_config(&self, patch: &ConfigPatch) {
        let mut state = self.state.lock().unwrap();
        state.config.apply(patch);
        println!(
            "[{}] Config applied: interval={}s speed={} fontSize={}",
            self.tag,
            state.config.interval_seconds,
            state.config.speed,
            state.config.font_size
        );
    }

    /// Replaces the deck (shuffled, cursor reset).
    pub fn load_deck(&self, words: Vec<WordItem>) {
        let mut state = self.state.lock().unwrap();
        state.deck.load(words);
        println!("[{}] Loaded {} words", self.tag, state.deck.len());
    }

    pub fn set_paused(&self, paused: bool) {
        self.state.lock().unwrap().paused = paused;
        println!("[{}] {}", self.tag, if paused { "Paused" } else { "Resumed" });
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.state.lock().unwrap().viewport = viewport;
    }

    /// Current rotation/spawn period, re-read by drivers every tick so
    /// a CONFIG takes effect on the next tick boundary.
    pub fn interval_seconds(&self) -> f64 {
        self.state.lock().unwrap().config.interval_seconds
    }
}
