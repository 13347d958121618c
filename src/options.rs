use serde::Deserialize;

/// Gap, in minutes, at or above which a new walk starts.
pub const DEFAULT_MIN_THRESHOLD_MINUTES: f64 = 10.0;

/// Options for segmenting and rendering walks.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkOptions {
    /// Minimum gap in minutes that ends a walk (default: 10)
    #[serde(default = "default_threshold")]
    pub min_threshold_minutes: f64,

    /// Include altitude as the 3rd coordinate value (default: true)
    #[serde(default = "default_true")]
    pub include_elevation: bool,

    /// Include timestamps in coordinateProperties.times (default: true)
    #[serde(default = "default_true")]
    pub include_time: bool,

    /// Include distance, duration, speed and list labels in properties (default: true)
    #[serde(default = "default_true")]
    pub include_summary: bool,

    /// Emit a Point feature for walks with one sample (default: true)
    #[serde(default = "default_true")]
    pub include_single_sample_walks: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            min_threshold_minutes: DEFAULT_MIN_THRESHOLD_MINUTES,
            include_elevation: true,
            include_time: true,
            include_summary: true,
            include_single_sample_walks: true,
        }
    }
}

impl WalkOptions {
    pub fn with_threshold(min_threshold_minutes: f64) -> Self {
        Self {
            min_threshold_minutes,
            ..Default::default()
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_MIN_THRESHOLD_MINUTES
}

fn default_true() -> bool {
    true
}
