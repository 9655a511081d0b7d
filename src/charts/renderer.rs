//! Pie Grid Renderer
//! Renders the time-distribution page with plotters into an in-memory RGB
//! buffer: one pie per selected record, slices for the four component
//! timings, arranged on a 2x3 grid under an overall title.

use crate::data::{TimingRecord, TimingTable};
use crate::stats::component_breakdown;
use plotters::coord::Shift;
use plotters::element::Polygon;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

pub const GRID_ROWS: usize = 2;
pub const GRID_COLS: usize = 3;

/// Matplotlib-style start angle: slices fan out counterclockwise from here.
const START_ANGLE_DEG: f64 = 140.0;

/// Slice palette, aligned with the first four interactive series colors.
const SLICE_COLORS: [RGBColor; 4] = [
    RGBColor(52, 152, 219),  // bincode deserialize
    RGBColor(231, 76, 60),   // verify clock
    RGBColor(46, 204, 113),  // Update clock
    RGBColor(155, 89, 182),  // Gen clock proof
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}

/// Which keys to feature on the pie grid page.
///
/// Injected rather than hardcoded in the renderer; keys that match no record
/// simply leave trailing grid cells blank.
#[derive(Debug, Clone)]
pub struct BreakdownConfig {
    pub keys: Vec<u64>,
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            keys: vec![4, 64, 1024, 4096, 16384, 65536],
        }
    }
}

/// Arc fan for one pie sector, starting at the center. Counterclockwise in
/// chart terms, so the screen y axis is inverted.
fn sector_points(
    center: (i32, i32),
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
) -> Vec<(i32, i32)> {
    let steps = ((sweep_deg / 2.0).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = (start_deg + sweep_deg * step as f64 / steps as f64).to_radians();
        points.push((
            center.0 + (radius * angle.cos()).round() as i32,
            center.1 - (radius * angle.sin()).round() as i32,
        ));
    }
    points
}

/// Renders the static breakdown page.
pub struct PieChartRenderer;

impl PieChartRenderer {
    /// Render the full page into a `width * height * 3` RGB buffer.
    pub fn render_grid(
        table: &TimingTable,
        config: &BreakdownConfig,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, RenderError> {
        let mut buffer = vec![0u8; width as usize * height as usize * 3];
        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_err)?;

            let page = root
                .titled(
                    "Time Distribution for Selected Keys",
                    ("sans-serif", 30).into_font(),
                )
                .map_err(draw_err)?;

            let cells = page.split_evenly((GRID_ROWS, GRID_COLS));
            let selected = table.select_keys(&config.keys);

            // Fewer matches than cells leaves the remaining axes blank.
            for (cell, record) in cells.iter().zip(selected) {
                Self::draw_pie(cell, record)?;
            }

            root.present().map_err(draw_err)?;
        }
        Ok(buffer)
    }

    fn draw_pie(
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        record: &TimingRecord,
    ) -> Result<(), RenderError> {
        let area = area
            .titled(
                &format!("Time Distribution for Key = {}", record.key),
                ("sans-serif", 18).into_font(),
            )
            .map_err(draw_err)?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.28;

        let label_style = ("sans-serif", 14)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        let percent_style = ("sans-serif", 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        let mut start = START_ANGLE_DEG;
        for (slice, color) in component_breakdown(record).iter().zip(SLICE_COLORS) {
            let sweep = slice.fraction * 360.0;
            if sweep > 0.0 {
                area.draw(&Polygon::new(
                    sector_points(center, radius, start, sweep),
                    color.filled(),
                ))
                .map_err(draw_err)?;
            }

            let mid = (start + sweep / 2.0).to_radians();
            let label_at = |distance: f64| {
                (
                    center.0 + (distance * mid.cos()).round() as i32,
                    center.1 - (distance * mid.sin()).round() as i32,
                )
            };

            area.draw(&Text::new(
                slice.field.label().to_string(),
                label_at(radius * 1.35),
                label_style.clone(),
            ))
            .map_err(draw_err)?;
            area.draw(&Text::new(
                format!("{:.1}%", slice.percent()),
                label_at(radius * 0.62),
                percent_style.clone(),
            ))
            .map_err(draw_err)?;

            start += sweep;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_features_six_keys() {
        let config = BreakdownConfig::default();
        assert_eq!(config.keys, vec![4, 64, 1024, 4096, 16384, 65536]);
        assert_eq!(config.keys.len(), GRID_ROWS * GRID_COLS);
    }

    #[test]
    fn sector_fan_starts_at_center() {
        let points = sector_points((100, 100), 50.0, 0.0, 90.0);
        assert_eq!(points[0], (100, 100));
        // First arc point lies on the positive x axis.
        assert_eq!(points[1], (150, 100));
        // Last arc point lies straight up (screen y decreases).
        assert_eq!(*points.last().unwrap(), (100, 50));
    }

    #[test]
    fn sector_fan_has_at_least_a_triangle() {
        let points = sector_points((0, 0), 10.0, 30.0, 0.5);
        assert!(points.len() >= 3);
    }
}
