pub mod console;
pub mod recording;

pub use console::ConsolePresenter;
pub use recording::{
    PresenterCall,
    RecordingPresenter,
};

use crate::core::{
    StickerSpec,
    WordItem,
};

/// The rendering collaborator the core drives. Window chrome, easing,
/// hit-testing and drag mechanics all live behind this seam; the core
/// only says what to show, where, and for how long.
pub trait Presenter: Send + Sync {
    /// Show an item with no transition (initial display after `WORDS`).
    fn show_immediate(&self, item: &WordItem);

    /// Replace the visible item with a fade transition.
    fn transition_to(&self, item: &WordItem);

    /// Animate an item across the viewport: enters at the right edge on
    /// `lane` at `top_y`, fully exits left after `duration_seconds`.
    fn spawn_moving(&self, item: &WordItem, lane: usize, top_y: f64, duration_seconds: f64);

    /// Create or replace the sticker for `spec.word` at its coordinates.
    fn place_sticker(&self, spec: &StickerSpec);

    fn remove_sticker(&self, word: &str);

    fn clear_all_stickers(&self);

    /// Show the example panel for an activated danmu item.
    fn show_example(&self, item: &WordItem);

    fn hide_example(&self);
}
