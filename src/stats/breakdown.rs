//! Component Breakdown Module
//! Splits a record's aggregate time into the shares of its four components.

use crate::data::{TimingField, TimingRecord};

/// One component timing and its share of the record's four-component sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentSlice {
    pub field: TimingField,
    pub value: f64,
    pub fraction: f64,
}

impl ComponentSlice {
    /// Share as a percentage, for `{:.1}%` style labels.
    pub fn percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Break a record down into its four component timings and their fractions
/// of the component sum. The aggregate field is not a slice.
///
/// A record whose components sum to zero yields all-zero fractions.
pub fn component_breakdown(record: &TimingRecord) -> Vec<ComponentSlice> {
    let sum: f64 = TimingField::COMPONENTS
        .iter()
        .map(|f| f.value_of(record))
        .sum();

    TimingField::COMPONENTS
        .iter()
        .map(|&field| {
            let value = field.value_of(record);
            let fraction = if sum > 0.0 { value / sum } else { 0.0 };
            ComponentSlice {
                field,
                value,
                fraction,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::TimingTable;

    fn key_one_record() -> TimingRecord {
        TimingRecord {
            key: 1,
            bincode_deserialize: 14.55,
            verify_clock: 4773.788,
            update_clock: 0.33,
            gen_clock_proof: 1571.576,
            total_once_time: 7367.268,
        }
    }

    #[test]
    fn four_component_sum_for_key_one() {
        let slices = component_breakdown(&key_one_record());
        let sum: f64 = slices.iter().map(|s| s.value).sum();
        assert!((sum - 6360.244).abs() < 1e-9);
    }

    #[test]
    fn bincode_share_for_key_one() {
        let slices = component_breakdown(&key_one_record());
        let bincode = &slices[0];
        assert_eq!(bincode.field, TimingField::BincodeDeserialize);
        assert!((bincode.percent() - 0.229).abs() < 1e-3);
    }

    #[test]
    fn percentages_sum_to_one_hundred_for_all_sample_records() {
        let table = TimingTable::sample().unwrap();
        for record in table.records() {
            let total: f64 = component_breakdown(record).iter().map(|s| s.percent()).sum();
            assert!((total - 100.0).abs() < 0.1, "key {}: {}", record.key, total);
        }
    }

    #[test]
    fn breakdown_is_deterministic() {
        let record = key_one_record();
        assert_eq!(component_breakdown(&record), component_breakdown(&record));
    }

    #[test]
    fn zero_components_yield_zero_fractions() {
        let record = TimingRecord {
            key: 1,
            bincode_deserialize: 0.0,
            verify_clock: 0.0,
            update_clock: 0.0,
            gen_clock_proof: 0.0,
            total_once_time: 0.0,
        };
        for slice in component_breakdown(&record) {
            assert_eq!(slice.fraction, 0.0);
        }
    }
}
