//! Charts module - chart rendering

mod plotter;
mod renderer;

pub use plotter::TimingPlotter;
pub use renderer::{BreakdownConfig, PieChartRenderer, RenderError};
