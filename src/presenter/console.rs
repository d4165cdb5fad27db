use super::Presenter;
use crate::core::{
    StickerSpec,
    WordItem,
};

/// Headless Presenter that logs every instruction. Used by the binary
/// so the core can run without any overlay window attached.
pub struct ConsolePresenter {
    tag: &'static str,
}

impl ConsolePresenter {
    pub fn new(tag: &'static str) -> Self {
        ConsolePresenter { tag }
    }
}

impl Presenter for ConsolePresenter {
    fn show_immediate(&self, item: &WordItem) {
        println!("[{}] show: {}", self.tag, item.word);
    }

    fn transition_to(&self, item: &WordItem) {
        println!("[{}] transition: {}", self.tag, item.word);
    }

    fn spawn_moving(&self, item: &WordItem, lane: usize, top_y: f64, duration_seconds: f64) {
        println!(
            "[{}] spawn: {} lane={} y={:.0} duration={:.1}s",
            self.tag, item.word, lane, top_y, duration_seconds
        );
    }

    fn place_sticker(&self, spec: &StickerSpec) {
        println!("[{}] sticker: {} at ({:.0}, {:.0})", self.tag, spec.word, spec.x, spec.y);
    }

    fn remove_sticker(&self, word: &str) {
        println!("[{}] remove sticker: {}", self.tag, word);
    }

    fn clear_all_stickers(&self) {
        println!("[{}] clear stickers", self.tag);
    }

    fn show_example(&self, item: &WordItem) {
        println!("[{}] example: {}", self.tag, item.word);
    }

    fn hide_example(&self) {
        println!("[{}] hide example", self.tag);
    }
}
