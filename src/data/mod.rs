//! Data module - benchmark timing records

mod table;

pub use table::{TableError, TimingField, TimingRecord, TimingTable};
