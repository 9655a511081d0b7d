//! Timing Table Module
//! Validated, immutable benchmark records keyed by the benchmark's key parameter.

use serde::Deserialize;
use thiserror::Error;

/// The embedded sample dataset, one object per benchmark run.
const SAMPLE_TIMINGS: &str = include_str!("sample_timings.json");

#[derive(Error, Debug)]
pub enum TableError {
    #[error("timing table is empty")]
    Empty,
    #[error("keys must be strictly increasing: key {found} follows key {previous}")]
    KeyOrder { previous: u64, found: u64 },
    #[error("record key {key}: '{field}' must be a finite, non-negative duration, got {value}")]
    BadTiming {
        key: u64,
        field: &'static str,
        value: f64,
    },
    #[error("failed to parse embedded dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One benchmark observation: a key parameter and five timings in microseconds.
///
/// `total_once_time` is the aggregate of one full run; the other four fields
/// are its components.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TimingRecord {
    pub key: u64,
    #[serde(rename = "bincode deserialize")]
    pub bincode_deserialize: f64,
    #[serde(rename = "verify clock")]
    pub verify_clock: f64,
    #[serde(rename = "Update clock")]
    pub update_clock: f64,
    #[serde(rename = "Gen clock proof")]
    pub gen_clock_proof: f64,
    #[serde(rename = "Total once time")]
    pub total_once_time: f64,
}

/// The five timing fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingField {
    BincodeDeserialize,
    VerifyClock,
    UpdateClock,
    GenClockProof,
    TotalOnceTime,
}

impl TimingField {
    /// All five fields, aggregate last.
    pub const ALL: [Self; 5] = [
        Self::BincodeDeserialize,
        Self::VerifyClock,
        Self::UpdateClock,
        Self::GenClockProof,
        Self::TotalOnceTime,
    ];

    /// The four component fields, excluding the aggregate.
    pub const COMPONENTS: [Self; 4] = [
        Self::BincodeDeserialize,
        Self::VerifyClock,
        Self::UpdateClock,
        Self::GenClockProof,
    ];

    /// Display label, matching the original measurement names.
    pub fn label(self) -> &'static str {
        match self {
            Self::BincodeDeserialize => "bincode deserialize",
            Self::VerifyClock => "verify clock",
            Self::UpdateClock => "Update clock",
            Self::GenClockProof => "Gen clock proof",
            Self::TotalOnceTime => "Total once time",
        }
    }

    /// Whether this is the aggregate of the four components.
    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::TotalOnceTime)
    }

    /// Read this field's value from a record.
    pub fn value_of(self, record: &TimingRecord) -> f64 {
        match self {
            Self::BincodeDeserialize => record.bincode_deserialize,
            Self::VerifyClock => record.verify_clock,
            Self::UpdateClock => record.update_clock,
            Self::GenClockProof => record.gen_clock_proof,
            Self::TotalOnceTime => record.total_once_time,
        }
    }
}

/// Ordered, validated sequence of timing records. Read-only after construction.
#[derive(Debug, Clone)]
pub struct TimingTable {
    records: Vec<TimingRecord>,
}

impl TimingTable {
    /// Build a table, enforcing strictly increasing keys and finite,
    /// non-negative timings.
    pub fn new(records: Vec<TimingRecord>) -> Result<Self, TableError> {
        if records.is_empty() {
            return Err(TableError::Empty);
        }

        let mut previous: Option<u64> = None;
        for record in &records {
            if let Some(prev) = previous {
                if record.key <= prev {
                    return Err(TableError::KeyOrder {
                        previous: prev,
                        found: record.key,
                    });
                }
            }
            previous = Some(record.key);

            for field in TimingField::ALL {
                let value = field.value_of(record);
                if !value.is_finite() || value < 0.0 {
                    return Err(TableError::BadTiming {
                        key: record.key,
                        field: field.label(),
                        value,
                    });
                }
            }
        }

        Ok(Self { records })
    }

    /// The embedded nine-record sample dataset.
    pub fn sample() -> Result<Self, TableError> {
        let records: Vec<TimingRecord> = serde_json::from_str(SAMPLE_TIMINGS)?;
        Self::new(records)
    }

    pub fn records(&self) -> &[TimingRecord] {
        &self.records
    }

    /// (key, value) pairs for one field, in table order.
    #[allow(dead_code)]
    pub fn points(&self, field: TimingField) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .map(|r| [r.key as f64, field.value_of(r)])
            .collect()
    }

    /// log10-transformed points for log-log axes. Zero values have no finite
    /// logarithm and are skipped.
    pub fn log_points(&self, field: TimingField) -> Vec<[f64; 2]> {
        self.records
            .iter()
            .filter_map(|r| {
                let value = field.value_of(r);
                if r.key > 0 && value > 0.0 {
                    Some([(r.key as f64).log10(), value.log10()])
                } else {
                    None
                }
            })
            .collect()
    }

    /// Records whose key appears in `keys`, in table order. Keys that match
    /// no record are ignored.
    pub fn select_keys(&self, keys: &[u64]) -> Vec<&TimingRecord> {
        self.records
            .iter()
            .filter(|r| keys.contains(&r.key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: u64) -> TimingRecord {
        TimingRecord {
            key,
            bincode_deserialize: 10.0,
            verify_clock: 20.0,
            update_clock: 30.0,
            gen_clock_proof: 40.0,
            total_once_time: 110.0,
        }
    }

    #[test]
    fn sample_has_nine_records_with_increasing_keys() {
        let table = TimingTable::sample().unwrap();
        let records = table.records();
        assert_eq!(records.len(), 9);

        for pair in records.windows(2) {
            assert!(pair[0].key < pair[1].key);
        }
    }

    #[test]
    fn sample_timings_are_finite_and_non_negative() {
        let table = TimingTable::sample().unwrap();
        for record in table.records() {
            for field in TimingField::ALL {
                let value = field.value_of(record);
                assert!(value.is_finite());
                assert!(value >= 0.0);
            }
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(TimingTable::new(Vec::new()), Err(TableError::Empty)));
    }

    #[test]
    fn out_of_order_keys_are_rejected() {
        let result = TimingTable::new(vec![record(4), record(4)]);
        assert!(matches!(
            result,
            Err(TableError::KeyOrder {
                previous: 4,
                found: 4
            })
        ));
    }

    #[test]
    fn negative_timing_is_rejected() {
        let mut bad = record(1);
        bad.update_clock = -0.5;
        let result = TimingTable::new(vec![bad]);
        assert!(matches!(result, Err(TableError::BadTiming { key: 1, .. })));
    }

    #[test]
    fn non_finite_timing_is_rejected() {
        let mut bad = record(1);
        bad.verify_clock = f64::NAN;
        assert!(TimingTable::new(vec![bad]).is_err());
    }

    #[test]
    fn select_keys_matches_six_sample_records() {
        let table = TimingTable::sample().unwrap();
        let selected = table.select_keys(&[4, 64, 1024, 4096, 16384, 65536]);
        let keys: Vec<u64> = selected.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![4, 64, 1024, 4096, 16384, 65536]);
    }

    #[test]
    fn select_keys_ignores_missing_keys() {
        let table = TimingTable::sample().unwrap();
        let selected = table.select_keys(&[1, 2, 3]);
        let keys: Vec<u64> = selected.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1]);
    }

    #[test]
    fn points_and_log_points_follow_table_order() {
        let table = TimingTable::sample().unwrap();
        let points = table.points(TimingField::TotalOnceTime);
        assert_eq!(points.len(), 9);
        assert_eq!(points[0], [1.0, 7367.268]);

        let log_points = table.log_points(TimingField::TotalOnceTime);
        assert_eq!(log_points.len(), 9);
        assert!((log_points[0][0] - 0.0).abs() < 1e-12);
        assert!((log_points[0][1] - 7367.268f64.log10()).abs() < 1e-12);
    }
}
