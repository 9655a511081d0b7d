//! Chart Plotter Module
//! Interactive scatter and line charts of the timing series using egui_plot.
//!
//! Both axes are logarithmic; egui_plot has no native log scale, so points
//! are plotted in log10 space and the axis formatters label powers of ten
//! with the untransformed value.

use crate::data::{TimingField, TimingTable};
use egui::Color32;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

/// Series palette, one color per timing field (aggregate last).
pub const PALETTE: [Color32; 5] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
];

/// Label a log10 grid mark with its untransformed value, powers of ten only.
/// Intermediate marks get no label to keep the axis readable.
fn format_log_tick(log_value: f64) -> String {
    let nearest = log_value.round();
    if (log_value - nearest).abs() > 1e-6 {
        return String::new();
    }
    let value = 10f64.powf(nearest);
    if value >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Draws the interactive timing charts.
pub struct TimingPlotter;

impl TimingPlotter {
    fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Shared log-log axis configuration for both chart kinds.
    fn log_log(plot: Plot) -> Plot {
        plot.legend(Legend::default())
            .x_axis_label("Key")
            .y_axis_label("Time (µs)")
            .x_axis_formatter(|mark, _range| format_log_tick(mark.value))
            .y_axis_formatter(|mark, _range| format_log_tick(mark.value))
            .label_formatter(|name, point| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!(
                        "{}\nkey = {:.0}\ntime = {:.3} µs",
                        name,
                        10f64.powf(point.x),
                        10f64.powf(point.y)
                    )
                }
            })
            .allow_scroll(false)
    }

    /// Scatter chart: one point series per timing field, the aggregate series
    /// drawn with a cross marker.
    pub fn draw_scatter_chart(ui: &mut egui::Ui, table: &TimingTable) {
        Self::log_log(Plot::new("timing_scatter")).show(ui, |plot_ui| {
            for (index, field) in TimingField::ALL.into_iter().enumerate() {
                let points: PlotPoints = table.log_points(field).into_iter().collect();
                let mut series = Points::new(points)
                    .radius(3.5)
                    .color(Self::series_color(index))
                    .name(field.label());
                if field.is_aggregate() {
                    series = series.shape(MarkerShape::Cross).radius(5.0);
                }
                plot_ui.points(series);
            }
        });
    }

    /// Line chart: same data as the scatter, each field connected; the
    /// aggregate series additionally carries a marker at each data point.
    pub fn draw_line_chart(ui: &mut egui::Ui, table: &TimingTable) {
        Self::log_log(Plot::new("timing_lines")).show(ui, |plot_ui| {
            for (index, field) in TimingField::ALL.into_iter().enumerate() {
                let color = Self::series_color(index);
                let points: PlotPoints = table.log_points(field).into_iter().collect();
                plot_ui.line(
                    Line::new(points)
                        .color(color)
                        .width(1.5)
                        .name(field.label()),
                );

                if field.is_aggregate() {
                    let markers: PlotPoints = table.log_points(field).into_iter().collect();
                    plot_ui.points(
                        Points::new(markers)
                            .shape(MarkerShape::Cross)
                            .radius(5.0)
                            .color(color)
                            .name(field.label()),
                    );
                }
            }
        });
    }
}
