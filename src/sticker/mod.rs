use std::collections::HashMap;

use crate::core::{
    models::STICKER_STYLES,
    StickerSpec,
};

/// The session's sticky-note space, keyed by word for upsert, removal
/// and drag-position routing. Layouts live only for the session.
#[derive(Default)]
pub struct StickerSpace {
    stickers: HashMap<String, StickerSpec>,
}

impl StickerSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces the sticker for `spec.word`. The style index
    /// is normalized into the preset table on the way in.
    pub fn add_or_update(&mut self, mut spec: StickerSpec) -> StickerSpec {
        spec.style_index %= STICKER_STYLES.len();
        self.stickers.insert(spec.word.clone(), spec.clone());
        spec
    }

    /// Removes one sticker; unknown words are a no-op.
    pub fn remove(&mut self, word: &str) -> Option<StickerSpec> {
        self.stickers.remove(word)
    }

    pub fn clear(&mut self) {
        self.stickers.clear();
    }

    /// Records the latest drag position. Returns false for unknown words.
    pub fn update_position(&mut self, word: &str, x: f64, y: f64) -> bool {
        match self.stickers.get_mut(word) {
            Some(sticker) => {
                sticker.x = x;
                sticker.y = y;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, word: &str) -> Option<&StickerSpec> {
        self.stickers.get(word)
    }

    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}
