use serde_json::json;
use std::path::Path;
use walktrack_wasm::converter::to_feature_collection;
use walktrack_wasm::format::walk_label;
use walktrack_wasm::options::WalkOptions;
use walktrack_wasm::parse_walks;

fn load_fixture(path: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{path}")).unwrap()
}

/// Walk list as a user sees it: rounded labels, sample counts and time span.
fn summarize(csv: &str) -> serde_json::Value {
    let report = parse_walks(Some(csv), &WalkOptions::default());
    let walks: Vec<serde_json::Value> = report
        .walks
        .iter()
        .enumerate()
        .map(|(i, walk)| {
            let label = walk_label(i, walk);
            json!({
                "title": label.title,
                "description": label.description,
                "samples": walk.len(),
                "start": walk.start_time(),
                "end": walk.end_time(),
            })
        })
        .collect();
    json!({ "walks": walks, "rejected": report.rejected })
}

/// GeoJSON without floating-point summaries, so coordinates are compared exactly.
fn geojson(csv: &str) -> serde_json::Value {
    let opts = WalkOptions {
        include_summary: false,
        ..Default::default()
    };
    let report = parse_walks(Some(csv), &opts);
    let fc = to_feature_collection(&report.walks, &opts);
    serde_json::to_value(&fc).unwrap()
}

/// Compare actual output against the expected snapshot file.
/// When `UPDATE_SNAPSHOTS=1` is set, write/overwrite the expected file instead.
fn assert_snapshot(actual: &serde_json::Value, expected_path: &str) {
    let path = format!("tests/fixtures/expected/{expected_path}");

    if matches!(std::env::var("UPDATE_SNAPSHOTS").as_deref(), Ok("1")) {
        let dir = Path::new(&path).parent().unwrap();
        std::fs::create_dir_all(dir).unwrap();
        let pretty = serde_json::to_string_pretty(actual).unwrap();
        std::fs::write(&path, pretty.as_bytes()).unwrap();
        eprintln!("Updated snapshot: {path}");
        return;
    }

    let expected_str = std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Expected file not found: {path}. Run with UPDATE_SNAPSHOTS=1 to generate."));
    let expected: serde_json::Value = serde_json::from_str(&expected_str)
        .unwrap_or_else(|e| panic!("Failed to parse {path}: {e}"));

    assert_eq!(
        *actual, expected,
        "Snapshot mismatch for {path}.\nRun with UPDATE_SNAPSHOTS=1 to update."
    );
}

fn assert_summary_snapshot(fixture: &str) {
    let actual = summarize(&load_fixture(&format!("{fixture}.csv")));
    assert_snapshot(&actual, &format!("{fixture}.summary.json"));
}

// ---- basic/ ----

#[test]
fn snapshot_01_two_walks() {
    assert_summary_snapshot("basic/01_two_walks");
}

#[test]
fn snapshot_02_equal_gaps() {
    assert_summary_snapshot("basic/02_equal_gaps");
}

#[test]
fn snapshot_03_single_row() {
    assert_summary_snapshot("basic/03_single_row");
}

// ---- edge_cases/ ----

#[test]
fn snapshot_04_header_only() {
    assert_summary_snapshot("edge_cases/04_header_only");
}

#[test]
fn snapshot_05_malformed_rows() {
    assert_summary_snapshot("edge_cases/05_malformed_rows");
}

#[test]
fn snapshot_06_fractional_timestamps() {
    assert_summary_snapshot("edge_cases/06_fractional_timestamps");
}

// ---- realistic/ ----

#[test]
fn snapshot_07_day_of_walks() {
    assert_summary_snapshot("realistic/07_day_of_walks");
}

// ---- geojson ----

#[test]
fn snapshot_01_two_walks_geojson() {
    let actual = geojson(&load_fixture("basic/01_two_walks.csv"));
    assert_snapshot(&actual, "basic/01_two_walks.geojson");
}

#[test]
fn snapshot_07_day_of_walks_geojson() {
    let actual = geojson(&load_fixture("realistic/07_day_of_walks.csv"));
    assert_snapshot(&actual, "realistic/07_day_of_walks.geojson");
}
