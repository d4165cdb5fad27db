use rand::{
    rng,
    seq::SliceRandom,
};

use crate::core::WordItem;

/// The shuffled pool of vocabulary driving rotation. Every full pass
/// visits each word exactly once, then the order is re-drawn so the
/// same absolute sequence does not repeat back to back.
#[derive(Default)]
pub struct WordDeck {
    items: Vec<WordItem>,
    cursor: usize,
}

impl WordDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the deck, shuffles it and resets the cursor.
    pub fn load(&mut self, items: Vec<WordItem>) {
        self.items = items;
        self.items.shuffle(&mut rng());
        self.cursor = 0;
    }

    /// Dispenses the word under the cursor and advances. Wrapping back
    /// to the start reshuffles, so the next pass has a fresh order.
    pub fn next(&mut self) -> Option<WordItem> {
        if self.items.is_empty() {
            return None;
        }

        let item = self.items[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.items.len();
        if self.cursor == 0 {
            self.items.shuffle(&mut rng());
        }

        Some(item)
    }

    /// Drops every entry matching `word`. The cursor is clamped so a
    /// shrink below it can never index out of bounds.
    pub fn remove_by_word(&mut self, word: &str) {
        self.items.retain(|item| item.word != word);
        self.cursor %= self.items.len().max(1);
    }

    pub fn find(&self, word: &str) -> Option<&WordItem> {
        self.items.iter().find(|item| item.word == word)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
