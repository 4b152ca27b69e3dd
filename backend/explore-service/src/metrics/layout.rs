//! Prometheus metrics for explore layout requests
//!
//! Tracks request outcomes, emitted tiles per kind and planning latency

use explore_layout::Tile;
use once_cell::sync::Lazy;
use prometheus::{
    register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};
use std::time::Duration;

/// Layout requests by outcome (ready/empty/rejected)
static LAYOUT_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "explore_layout_requests_total",
        "Total number of explore layout requests by outcome",
        &["outcome"]
    )
    .expect("failed to register explore_layout_requests_total")
});

/// Tiles emitted by kind (hero/pair/solo/discussion)
static LAYOUT_TILES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "explore_layout_tiles_total",
        "Total number of tiles emitted by kind and layout",
        &["kind", "layout"]
    )
    .expect("failed to register explore_layout_tiles_total")
});

/// Time spent grouping posts into tiles
static LAYOUT_DURATION_SECONDS: Lazy<Histogram> = Lazy::new(|| {
    register_histogram!(
        "explore_layout_duration_seconds",
        "Duration of explore layout planning",
        vec![0.00001, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]
    )
    .expect("failed to register explore_layout_duration_seconds")
});

pub fn record_request(outcome: &str) {
    LAYOUT_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
}

pub fn record_tiles(tiles: &[Tile<'_>]) {
    for tile in tiles {
        LAYOUT_TILES_TOTAL
            .with_label_values(&[tile.kind.as_str(), tile.layout.as_str()])
            .inc();
    }
}

pub fn record_duration(duration: Duration) {
    LAYOUT_DURATION_SECONDS.observe(duration.as_secs_f64());
}
