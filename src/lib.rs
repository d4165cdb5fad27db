pub mod core;
pub mod deck;
pub mod overlay;
pub mod presenter;
pub mod server;
pub mod sticker;
pub mod track;

#[cfg(test)]
mod e2e_tests;
