use geo::{Distance, Haversine, Point};
use log::debug;

use crate::sample::{GpsSample, Walk};

const MS_PER_MINUTE: f64 = 60_000.0;

/// Partition time-ordered samples into walks.
///
/// A gap strictly below `min_threshold_minutes` keeps the sample in the current walk;
/// a gap at or above it closes the walk and starts a new one. Samples are not
/// re-sorted. An empty input gives no walks.
pub fn segment(samples: Vec<GpsSample>, min_threshold_minutes: f64) -> Vec<Walk> {
    let mut walks = Vec::new();
    let mut current: Vec<GpsSample> = Vec::new();
    let mut prev_ms: Option<i64> = None;

    for sample in samples {
        let ts = sample.epoch_ms;
        if let Some(prev) = prev_ms {
            let gap_minutes = (ts - prev) as f64 / MS_PER_MINUTE;
            // Negated so a NaN threshold splits everywhere.
            if !(gap_minutes < min_threshold_minutes) {
                walks.push(Walk::new(std::mem::take(&mut current)));
            }
        }
        current.push(sample);
        prev_ms = Some(ts);
    }

    if !current.is_empty() {
        walks.push(Walk::new(current));
    }

    debug!(
        "Segmented into {} walks at {min_threshold_minutes} min threshold",
        walks.len()
    );
    walks
}

/// Sum of great-circle distances in meters between consecutive samples.
/// Altitude is ignored.
pub fn path_length(samples: &[GpsSample]) -> f64 {
    samples
        .windows(2)
        .map(|pair| {
            let a = Point::new(pair[0].longitude, pair[0].latitude);
            let b = Point::new(pair[1].longitude, pair[1].latitude);
            Haversine::distance(a, b)
        })
        .sum()
}
