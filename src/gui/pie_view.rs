//! Pie Grid View
//! Displays the plotters-rendered breakdown page as an egui texture. The page
//! is rendered once and cached; the records never change at runtime.

use crate::charts::{BreakdownConfig, PieChartRenderer};
use crate::data::TimingTable;
use egui::{Color32, RichText, TextureHandle, TextureOptions};

const PAGE_WIDTH: u32 = 1440;
const PAGE_HEIGHT: u32 = 840;

/// Cached static rendering of the breakdown page.
pub struct PieGridView {
    texture: Option<TextureHandle>,
    error: Option<String>,
}

impl Default for PieGridView {
    fn default() -> Self {
        Self {
            texture: None,
            error: None,
        }
    }
}

impl PieGridView {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_rendered(&mut self, ctx: &egui::Context, table: &TimingTable, config: &BreakdownConfig) {
        if self.texture.is_some() || self.error.is_some() {
            return;
        }

        match PieChartRenderer::render_grid(table, config, PAGE_WIDTH, PAGE_HEIGHT) {
            Ok(rgb) => {
                let image = egui::ColorImage::from_rgb(
                    [PAGE_WIDTH as usize, PAGE_HEIGHT as usize],
                    &rgb,
                );
                self.texture =
                    Some(ctx.load_texture("breakdown_grid", image, TextureOptions::LINEAR));
            }
            Err(e) => {
                log::error!("breakdown page rendering failed: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Draw the page, scaled down to fit the available panel.
    pub fn show(&mut self, ui: &mut egui::Ui, table: &TimingTable, config: &BreakdownConfig) {
        self.ensure_rendered(ui.ctx(), table, config);

        if let Some(error) = &self.error {
            ui.centered_and_justified(|ui| {
                ui.label(
                    RichText::new(format!("Chart rendering failed: {error}"))
                        .size(16.0)
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            });
            return;
        }

        if let Some(texture) = &self.texture {
            let size = texture.size_vec2();
            let avail = ui.available_size();
            let scale = (avail.x / size.x).min(avail.y / size.y).min(1.0);
            ui.centered_and_justified(|ui| {
                ui.image((texture.id(), size * scale));
            });
        }
    }
}
