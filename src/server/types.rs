use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    ConfigPatch,
    StickerSpec,
    WordItem,
    WordriftError,
};

/// One decoded control message. The wire envelope is a JSON object
/// tagged by its `cmd` string; unknown tags decode to `Unrecognized`
/// so a newer controller never errors an older overlay.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    Config { config: ConfigPatch },
    Words { words: Vec<WordItem> },
    Pause,
    Resume,
    Stop,
    AddSticker { sticker: StickerSpec },
    LoadSpace { stickers: Vec<StickerSpec> },
    Clear,
    #[serde(other)]
    Unrecognized,
}

/// Decodes one framed line. Malformed JSON or a missing `cmd` is a
/// decode error the caller logs and drops; it never ends the connection.
pub fn decode_command(line: &str) -> Result<Command, WordriftError> {
    Ok(serde_json::from_str(line)?)
}

/// Outbound event to the controlling peer, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutboundEvent {
    WordMastered { word: String },
    PositionUpdate { word: String, x: f64, y: f64 },
    StickerRemoved { word: String },
}
