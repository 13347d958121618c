use serde::Serialize;

use crate::sample::Walk;

/// Round to 2 decimal places, halves away from zero. Display only.
pub fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Text for one row of a walk list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkLabel {
    pub title: String,
    pub description: String,
}

/// Label the walk at `index` (0-based) in a list of walks.
pub fn walk_label(index: usize, walk: &Walk) -> WalkLabel {
    WalkLabel {
        title: format!("Walk #{}", index + 1),
        description: format!(
            "Dist:{}mt Dur:{}min Avg Spd:{}mt/sec",
            two_decimals(walk.distance),
            two_decimals(walk.duration / 60.0),
            two_decimals(walk.speed)
        ),
    }
}
