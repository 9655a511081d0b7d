//! Timeviz Main Application
//! Main window with a tab bar selecting one of the three chart pages.

use crate::charts::{BreakdownConfig, TimingPlotter};
use crate::data::TimingTable;
use crate::gui::PieGridView;
use egui::{RichText, TopBottomPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Scatter,
    Line,
    Breakdown,
}

impl ChartTab {
    const ALL: [Self; 3] = [Self::Scatter, Self::Line, Self::Breakdown];

    fn name(self) -> &'static str {
        match self {
            Self::Scatter => "Scatter",
            Self::Line => "Line",
            Self::Breakdown => "Breakdown",
        }
    }

    fn heading(self) -> &'static str {
        match self {
            Self::Scatter => "Scatter Plot of Function Execution Times",
            Self::Line => "Line Plot of Function Execution Times",
            Self::Breakdown => "Time Distribution for Selected Keys",
        }
    }
}

/// Main application window.
pub struct TimevizApp {
    table: TimingTable,
    breakdown: BreakdownConfig,
    pie_view: PieGridView,
    active_tab: ChartTab,
}

impl TimevizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, table: TimingTable) -> Self {
        Self {
            table,
            breakdown: BreakdownConfig::default(),
            pie_view: PieGridView::new(),
            active_tab: ChartTab::Scatter,
        }
    }
}

impl eframe::App for TimevizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("📊 Timeviz").size(16.0).strong());
                ui.separator();
                for tab in ChartTab::ALL {
                    ui.selectable_value(&mut self.active_tab, tab, tab.name());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            // The breakdown page carries its title inside the rendered image.
            if self.active_tab != ChartTab::Breakdown {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(self.active_tab.heading()).size(16.0).strong());
                });
                ui.add_space(4.0);
            }

            match self.active_tab {
                ChartTab::Scatter => TimingPlotter::draw_scatter_chart(ui, &self.table),
                ChartTab::Line => TimingPlotter::draw_line_chart(ui, &self.table),
                ChartTab::Breakdown => {
                    self.pie_view.show(ui, &self.table, &self.breakdown);
                }
            }
        });
    }
}
