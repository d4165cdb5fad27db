pub mod config;
pub mod errors;
pub mod models;
pub mod stop;

pub use config::{
    Color,
    ConfigPatch,
    LayoutPosition,
    OverlayConfig,
};
pub use errors::WordriftError;
pub use models::{
    StickerSpec,
    Viewport,
    WordItem,
};
pub use stop::StopToken;
