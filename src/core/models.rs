use serde::{
    Deserialize,
    Serialize,
};

use super::config::Color;

/// One vocabulary entry. Only the word itself is guaranteed; the
/// companion app omits fields it has no data for. Wire keys are the
/// controller's PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordItem {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "Phonetic", skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(rename = "Translation", skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(rename = "Example", skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(rename = "ExampleTrans", skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
}

impl WordItem {
    pub fn new(word: impl Into<String>) -> Self {
        WordItem {
            word: word.into(),
            phonetic: None,
            translation: None,
            example: None,
            example_translation: None,
        }
    }
}

fn default_coordinate() -> f64 {
    100.0
}

/// Sticky-note spec, keyed by `word` for upsert and removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerSpec {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(default = "default_coordinate")]
    pub x: f64,
    #[serde(default = "default_coordinate")]
    pub y: f64,
    #[serde(rename = "styleIndex", default)]
    pub style_index: usize,
}

/// Background / text / border triple for one sticker preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerStyle {
    pub background: Color,
    pub text: Color,
    pub border: Color,
}

pub const STICKER_STYLES: [StickerStyle; 5] = [
    // yellow note
    StickerStyle {
        background: Color::rgb(255, 224, 102),
        text: Color::rgb(51, 51, 51),
        border: Color::rgb(255, 215, 0),
    },
    // blue
    StickerStyle {
        background: Color::rgb(126, 200, 227),
        text: Color::WHITE,
        border: Color::rgb(91, 168, 200),
    },
    // green
    StickerStyle {
        background: Color::rgb(152, 216, 170),
        text: Color::WHITE,
        border: Color::rgb(120, 184, 154),
    },
    // pink
    StickerStyle {
        background: Color::rgb(255, 154, 162),
        text: Color::WHITE,
        border: Color::rgb(223, 122, 130),
    },
    // purple
    StickerStyle {
        background: Color::rgb(177, 156, 217),
        text: Color::WHITE,
        border: Color::rgb(145, 124, 185),
    },
];

/// Screen size the Presenter renders into, pushed by the embedder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 1920.0, height: 1080.0 }
    }
}
