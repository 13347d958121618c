use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::format::walk_label;
use crate::options::WalkOptions;
use crate::sample::{GpsSample, Walk};

/// Convert walks to a GeoJSON FeatureCollection, one Feature per walk.
pub fn to_feature_collection(walks: &[Walk], opts: &WalkOptions) -> FeatureCollection {
    let features = walks
        .iter()
        .enumerate()
        .filter(|(_, walk)| !walk.is_empty())
        .filter(|(_, walk)| walk.len() >= 2 || opts.include_single_sample_walks)
        .map(|(index, walk)| walk_to_feature(index, walk, opts))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn walk_to_feature(index: usize, walk: &Walk, opts: &WalkOptions) -> Feature {
    let value = match walk.gps.as_slice() {
        [single] => Value::Point(sample_coords(single, opts.include_elevation)),
        samples => Value::LineString(
            samples
                .iter()
                .map(|s| sample_coords(s, opts.include_elevation))
                .collect(),
        ),
    };

    let mut props = Map::new();
    props.insert("walkIndex".to_string(), JsonValue::Number(index.into()));

    if opts.include_summary {
        insert_f64(&mut props, "distance", walk.distance);
        insert_f64(&mut props, "duration", walk.duration);
        insert_f64(&mut props, "speed", walk.speed);
        let label = walk_label(index, walk);
        props.insert("title".to_string(), JsonValue::String(label.title));
        props.insert(
            "description".to_string(),
            JsonValue::String(label.description),
        );
    }

    if opts.include_time {
        insert_coordinate_times(&mut props, &walk.gps);
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Build [lon, lat] or [lon, lat, alt] coordinate array.
fn sample_coords(s: &GpsSample, include_elevation: bool) -> Vec<f64> {
    if include_elevation {
        vec![s.longitude, s.latitude, s.altitude]
    } else {
        vec![s.longitude, s.latitude]
    }
}

fn insert_f64(props: &mut Map<String, JsonValue>, key: &str, value: f64) {
    props.insert(
        key.to_string(),
        JsonValue::Number(serde_json::Number::from_f64(value).unwrap_or(0.into())),
    );
}

fn insert_coordinate_times(props: &mut Map<String, JsonValue>, samples: &[GpsSample]) {
    let times: Vec<JsonValue> = samples
        .iter()
        .map(|s| JsonValue::String(s.timestamp.clone()))
        .collect();

    let mut coord_props = Map::new();
    coord_props.insert("times".to_string(), JsonValue::Array(times));
    props.insert(
        "coordinateProperties".to_string(),
        JsonValue::Object(coord_props),
    );
}
