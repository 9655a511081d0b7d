//! Stats module - per-record component breakdown

mod breakdown;

pub use breakdown::{component_breakdown, ComponentSlice};
