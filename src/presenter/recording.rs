use std::sync::{
    Arc,
    Mutex,
};

use super::Presenter;
use crate::core::{
    StickerSpec,
    WordItem,
};

/// Everything a Presenter can be told, captured for assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    ShowImmediate(String),
    TransitionTo(String),
    SpawnMoving { word: String, lane: usize, top_y: f64, duration_seconds: f64 },
    PlaceSticker(StickerSpec),
    RemoveSticker(String),
    ClearAllStickers,
    ShowExample(String),
    HideExample,
}

/// Presenter double that records the calls it receives, in order.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    calls: Arc<Mutex<Vec<PresenterCall>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn has_call(&self, predicate: impl Fn(&PresenterCall) -> bool) -> bool {
        self.calls.lock().unwrap().iter().any(|call| predicate(call))
    }

    fn record(&self, call: PresenterCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn show_immediate(&self, item: &WordItem) {
        self.record(PresenterCall::ShowImmediate(item.word.clone()));
    }

    fn transition_to(&self, item: &WordItem) {
        self.record(PresenterCall::TransitionTo(item.word.clone()));
    }

    fn spawn_moving(&self, item: &WordItem, lane: usize, top_y: f64, duration_seconds: f64) {
        self.record(PresenterCall::SpawnMoving {
            word: item.word.clone(),
            lane,
            top_y,
            duration_seconds,
        });
    }

    fn place_sticker(&self, spec: &StickerSpec) {
        self.record(PresenterCall::PlaceSticker(spec.clone()));
    }

    fn remove_sticker(&self, word: &str) {
        self.record(PresenterCall::RemoveSticker(word.to_string()));
    }

    fn clear_all_stickers(&self) {
        self.record(PresenterCall::ClearAllStickers);
    }

    fn show_example(&self, item: &WordItem) {
        self.record(PresenterCall::ShowExample(item.word.clone()));
    }

    fn hide_example(&self) {
        self.record(PresenterCall::HideExample);
    }
}
