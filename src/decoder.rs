use chrono::{Local, LocalResult, NaiveDateTime, Offset, TimeZone};
use csv::StringRecord;
use log::{debug, warn};

use crate::error::DecodeError;
use crate::sample::{GpsSample, RejectedRow};

type Result<T> = std::result::Result<T, DecodeError>;

/// Column order of every data row.
pub const FIELDS: [&str; 8] = [
    "timestamp",
    "latitude",
    "longitude",
    "altitude",
    "horizontalAccuracy",
    "verticalAccuracy",
    "speed",
    "course",
];

/// Only this many leading characters of a timestamp are significant.
const TIMESTAMP_LEN: usize = 19;

/// Samples decoded from a whole CSV text, plus the rows that were skipped.
#[derive(Debug, Default)]
pub struct DecodedCsv {
    pub samples: Vec<GpsSample>,
    pub rejected: Vec<RejectedRow>,
}

/// Decode one semicolon-delimited data row.
pub fn decode(line: &str) -> Result<GpsSample> {
    let record: StringRecord = line.split(';').map(str::trim).collect();
    decode_record(&record)
}

impl std::str::FromStr for GpsSample {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

/// Decode a full CSV text. The first physical line is a header and is always
/// skipped, whatever it holds. Blank lines are ignored. Rows that fail to decode
/// are reported in `rejected`, never mixed into `samples`.
pub fn decode_csv(text: &str) -> DecodedCsv {
    let mut decoded = DecodedCsv::default();

    for (idx, row) in text.lines().enumerate().skip(1) {
        if row.trim().is_empty() {
            continue;
        }

        match decode(row) {
            Ok(sample) => decoded.samples.push(sample),
            Err(err) => {
                let line = idx as u64 + 1;
                warn!("Skipping line {line}: {err}");
                decoded.rejected.push(RejectedRow {
                    line,
                    reason: err.to_string(),
                });
            }
        }
    }

    debug!(
        "Decoded {} samples, rejected {} rows",
        decoded.samples.len(),
        decoded.rejected.len()
    );
    decoded
}

fn decode_record(record: &StringRecord) -> Result<GpsSample> {
    let timestamp = field(record, 0)?;
    let epoch_ms = parse_timestamp(timestamp).ok_or_else(|| DecodeError::InvalidTimestamp {
        value: timestamp.to_string(),
    })?;

    Ok(GpsSample {
        timestamp: timestamp.to_string(),
        latitude: number(record, 1)?,
        longitude: number(record, 2)?,
        altitude: number(record, 3)?,
        horizontal_accuracy: number(record, 4)?,
        vertical_accuracy: number(record, 5)?,
        speed: number(record, 6)?,
        course: number(record, 7)?,
        epoch_ms,
    })
}

fn field(record: &StringRecord, idx: usize) -> Result<&str> {
    record
        .get(idx)
        .filter(|v| !v.is_empty())
        .ok_or(DecodeError::MissingField { field: FIELDS[idx] })
}

fn number(record: &StringRecord, idx: usize) -> Result<f64> {
    let value = field(record, idx)?;
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DecodeError::InvalidNumber {
            field: FIELDS[idx],
            value: value.to_string(),
        })
}

/// Normalize a `YYYY-MM-DD HH:MM:SS...` timestamp to milliseconds since the epoch.
///
/// Only the first 19 characters are read; anything after them (fractional seconds,
/// zone suffix) is ignored. The date-time is interpreted in the local time zone.
/// Returns `None` when the string is not a date-time.
pub fn parse_timestamp(timestamp: &str) -> Option<i64> {
    let end = timestamp
        .char_indices()
        .nth(TIMESTAMP_LEN)
        .map_or(timestamp.len(), |(i, _)| i);
    let iso = timestamp[..end].replacen(' ', "T", 1);

    let naive = NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&iso, "%Y-%m-%dT%H:%M"))
        .ok()?;

    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.timestamp_millis()),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp_millis()),
        LocalResult::None => {
            // Wall-clock time skipped by a DST jump, shift forward by the offset in force.
            let offset = Local.offset_from_utc_datetime(&naive).fix();
            Some(
                naive.and_utc().timestamp_millis()
                    - i64::from(offset.local_minus_utc()) * 1000,
            )
        }
    }
}
