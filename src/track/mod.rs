use std::{
    collections::HashMap,
    time::{
        Duration,
        Instant,
    },
};

use rand::{
    rng,
    seq::IndexedRandom,
};

use crate::core::{
    OverlayConfig,
    Viewport,
};

/// Lane height in pixels.
pub const LANE_HEIGHT: f64 = 70.0;
/// Vertical gap between lanes in pixels.
pub const LANE_GAP: f64 = 10.0;
/// Horizontal slack a danmu must put between itself and the spawn edge
/// before the lane is handed out again.
pub const LANE_CLEARANCE_MARGIN: f64 = 50.0;
/// Pixels per second at `speed = 1.0`.
pub const PX_PER_SECOND_UNIT: f64 = 100.0;

/// The horizontal band danmu lanes are carved out of, derived from the
/// config percentages and the current viewport each placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneBand {
    pub top_px: f64,
    pub height_px: f64,
}

impl LaneBand {
    pub fn from_config(config: &OverlayConfig, viewport: &Viewport) -> Self {
        LaneBand {
            top_px: viewport.height * config.area_top_percent / 100.0,
            height_px: viewport.height * config.area_height_percent / 100.0,
        }
    }

    pub fn lane_count(&self) -> usize {
        let count = (self.height_px / (LANE_HEIGHT + LANE_GAP)) as usize;
        count.max(1)
    }

    pub fn lane_top(&self, lane: usize) -> f64 {
        self.top_px + lane as f64 * (LANE_HEIGHT + LANE_GAP)
    }
}

/// A granted lane: index plus the vertical offset the Presenter spawns at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub lane: usize,
    pub top_y: f64,
}

/// Assigns and reclaims danmu lanes by projected occupancy end-time.
/// A lane absent from the map, or whose release time has passed, is
/// free; expired entries are purged lazily on each `acquire`.
#[derive(Default)]
pub struct TrackScheduler {
    occupied: HashMap<usize, Instant>,
}

impl TrackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long the spawn point stays blocked: until the item's trailing
    /// edge clears it by `LANE_CLEARANCE_MARGIN`. Intentionally shorter
    /// than the full transit, which is what lets a lane be reused while
    /// the previous item is still crossing the viewport.
    pub fn clear_seconds(item_width_px: f64, speed: f64) -> f64 {
        (item_width_px + LANE_CLEARANCE_MARGIN) / (PX_PER_SECOND_UNIT * speed)
    }

    /// Full right-edge-to-off-left-edge animation time for the Presenter.
    pub fn transit_seconds(viewport_width_px: f64, item_width_px: f64, speed: f64) -> f64 {
        (viewport_width_px + item_width_px) / (PX_PER_SECOND_UNIT * speed)
    }

    /// Picks a free lane uniformly at random, records its release time
    /// and returns the placement. `None` means every lane is held and
    /// the caller skips this item — items are dropped, never queued.
    pub fn acquire(
        &mut self,
        now: Instant,
        band: &LaneBand,
        item_width_px: f64,
        speed: f64,
    ) -> Option<Placement> {
        self.occupied.retain(|_, release| *release > now);

        let free: Vec<usize> =
            (0..band.lane_count()).filter(|lane| !self.occupied.contains_key(lane)).collect();

        let lane = *free.choose(&mut rng())?;

        let hold = Duration::from_secs_f64(Self::clear_seconds(item_width_px, speed));
        self.occupied.insert(lane, now + hold);

        Some(Placement { lane, top_y: band.lane_top(lane) })
    }

    pub fn occupied_lanes(&self) -> usize {
        self.occupied.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    // 400px band => 5 lanes of 80px each.
    fn band() -> LaneBand {
        LaneBand { top_px: 54.0, height_px: 400.0 }
    }

    #[test]
    fn lane_count_from_band_height() {
        assert_eq!(band().lane_count(), 5);
        // A band too short for a single lane still yields one.
        assert_eq!(LaneBand { top_px: 0.0, height_px: 10.0 }.lane_count(), 1);
        assert_eq!(LaneBand { top_px: 0.0, height_px: 0.0 }.lane_count(), 1);
    }

    #[test]
    fn concurrent_placements_never_share_a_lane() {
        let mut scheduler = TrackScheduler::new();
        let now = Instant::now();
        let band = band();

        let mut lanes = HashSet::new();
        for _ in 0..band.lane_count() {
            let placement = scheduler.acquire(now, &band, 300.0, 0.6).expect("lane free");
            assert!(lanes.insert(placement.lane), "lane handed out twice");
            assert!(placement.lane < band.lane_count());
            assert_eq!(placement.top_y, band.lane_top(placement.lane));
        }
    }

    #[test]
    fn saturated_band_rejects_the_next_acquire() {
        let mut scheduler = TrackScheduler::new();
        let now = Instant::now();
        let band = band();

        for _ in 0..band.lane_count() {
            assert!(scheduler.acquire(now, &band, 300.0, 0.6).is_some());
        }
        assert!(scheduler.acquire(now, &band, 300.0, 0.6).is_none());
    }

    #[test]
    fn expired_lanes_are_reclaimed() {
        let mut scheduler = TrackScheduler::new();
        let now = Instant::now();
        let band = band();

        for _ in 0..band.lane_count() {
            scheduler.acquire(now, &band, 300.0, 0.6);
        }

        // Just past the hold window of a 300px item at speed 0.6.
        let hold = Duration::from_secs_f64(TrackScheduler::clear_seconds(300.0, 0.6));
        let later = now + hold + Duration::from_millis(1);

        assert!(scheduler.acquire(later, &band, 300.0, 0.6).is_some());
        // The purge dropped every stale entry, not only the reused lane.
        assert_eq!(scheduler.occupied_lanes(), 1);
    }

    #[test]
    fn lane_hold_is_shorter_than_full_transit() {
        // The asymmetry is the point: the lane frees once the trailing
        // edge clears the spawn margin, well before the item exits left.
        let clear = TrackScheduler::clear_seconds(300.0, 0.6);
        let transit = TrackScheduler::transit_seconds(1920.0, 300.0, 0.6);
        assert!(clear < transit);

        assert!((clear - (350.0 / 60.0)).abs() < 1e-9);
        assert!((transit - (2220.0 / 60.0)).abs() < 1e-9);
    }
}
