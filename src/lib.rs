pub mod converter;
pub mod decoder;
pub mod error;
pub mod format;
pub mod options;
pub mod sample;
pub mod segmenter;

use wasm_bindgen::prelude::*;

use crate::options::WalkOptions;
use crate::sample::WalkReport;

/// Decode and segment a whole CSV text.
///
/// `None` means the caller had no text to give (a failed fetch, a missing file) and
/// yields an empty report.
pub fn parse_walks(text: Option<&str>, opts: &WalkOptions) -> WalkReport {
    let Some(text) = text else {
        return WalkReport::default();
    };

    let decoded = decoder::decode_csv(text);
    WalkReport {
        walks: segmenter::segment(decoded.samples, opts.min_threshold_minutes),
        rejected: decoded.rejected,
    }
}

/// Segment CSV text into walks, returned as a JS object.
#[wasm_bindgen(js_name = parseWalks)]
pub fn parse_walks_js(csv: Option<String>, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let report = parse_walks(csv.as_deref(), &opts);
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Segment CSV text into walks, returned as a JSON string.
#[wasm_bindgen(js_name = parseWalksString)]
pub fn parse_walks_string(csv: Option<String>, options: JsValue) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let report = parse_walks(csv.as_deref(), &opts);
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Segment CSV text and render the walks as a GeoJSON FeatureCollection.
#[wasm_bindgen(js_name = walksToGeoJson)]
pub fn walks_to_geojson(csv: Option<String>, options: JsValue) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let opts = parse_options(options)?;
    let report = parse_walks(csv.as_deref(), &opts);
    let fc = converter::to_feature_collection(&report.walks, &opts);
    serde_wasm_bindgen::to_value(&fc).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decode a single data row. Throws on a malformed row.
#[wasm_bindgen(js_name = decodeRecord)]
pub fn decode_record(line: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let sample = decoder::decode(line)?;
    serde_wasm_bindgen::to_value(&sample).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Milliseconds since the epoch for a timestamp, or `undefined`.
#[wasm_bindgen(js_name = parseTimestamp)]
pub fn parse_timestamp(timestamp: &str) -> Option<f64> {
    console_error_panic_hook::set_once();

    decoder::parse_timestamp(timestamp).map(|ms| ms as f64)
}

#[wasm_bindgen(js_name = twoDecimals)]
pub fn two_decimals(value: f64) -> f64 {
    console_error_panic_hook::set_once();

    format::two_decimals(value)
}

fn parse_options(options: JsValue) -> Result<WalkOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(WalkOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text_is_empty() {
        let report = parse_walks(None, &WalkOptions::default());
        assert!(report.walks.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_empty_text_is_empty() {
        let report = parse_walks(Some(""), &WalkOptions::default());
        assert!(report.walks.is_empty());
    }

    #[test]
    fn test_threshold_from_options() {
        let text = "header
2021-01-01 10:00:00;35.0;139.0;0;0;0;0;0
2021-01-01 10:05:00;35.0;139.0;0;0;0;0;0";
        assert_eq!(parse_walks(Some(text), &WalkOptions::default()).walks.len(), 1);
        assert_eq!(
            parse_walks(Some(text), &WalkOptions::with_threshold(5.0)).walks.len(),
            2
        );
    }
}
