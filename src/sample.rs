use serde::Serialize;

use crate::segmenter::path_length;

/// A single decoded GPS fix, one per data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsSample {
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub horizontal_accuracy: f64,
    pub vertical_accuracy: f64,
    pub speed: f64,
    pub course: f64,
    /// Normalized `timestamp`, milliseconds since the Unix epoch.
    #[serde(skip)]
    pub(crate) epoch_ms: i64,
}

impl GpsSample {
    /// Milliseconds since the Unix epoch, local time zone.
    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }
}

/// A contiguous run of samples with every gap below the segmentation threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Walk {
    /// Path length in meters.
    pub distance: f64,
    /// Seconds between the first and last sample.
    pub duration: f64,
    /// Average speed in meters per second, 0 when `duration` is 0.
    pub speed: f64,
    pub gps: Vec<GpsSample>,
}

impl Walk {
    /// Summarize a group of samples. An empty group yields an all-zero walk.
    pub(crate) fn new(gps: Vec<GpsSample>) -> Self {
        let duration = match (gps.first(), gps.last()) {
            (Some(first), Some(last)) => (last.epoch_ms - first.epoch_ms) as f64 / 1000.0,
            _ => 0.0,
        };
        let distance = path_length(&gps);
        let speed = if duration > 0.0 {
            distance / duration
        } else {
            0.0
        };

        Self {
            distance,
            duration,
            speed,
            gps,
        }
    }

    pub fn len(&self) -> usize {
        self.gps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gps.is_empty()
    }

    pub fn start_time(&self) -> Option<&str> {
        self.gps.first().map(|s| s.timestamp.as_str())
    }

    pub fn end_time(&self) -> Option<&str> {
        self.gps.last().map(|s| s.timestamp.as_str())
    }

    /// The walk as map-ready points, in order.
    pub fn route(&self) -> Vec<RoutePoint> {
        self.gps
            .iter()
            .map(|s| RoutePoint {
                latitude: s.latitude,
                longitude: s.longitude,
                timestamp: s.timestamp.clone(),
            })
            .collect()
    }
}

/// A point on a walk's polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: String,
}

/// A row that could not be decoded and was left out of segmentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the input text.
    pub line: u64,
    pub reason: String,
}

/// Result of a full text-to-walks pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WalkReport {
    pub walks: Vec<Walk>,
    pub rejected: Vec<RejectedRow>,
}
