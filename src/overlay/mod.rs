pub mod carousel;
pub mod danmu;
pub mod session;
pub mod sticky;

pub use carousel::CarouselOverlay;
pub use danmu::DanmuOverlay;
pub use session::{
    OverlaySession,
    SessionState,
};
pub use sticky::StickyOverlay;
