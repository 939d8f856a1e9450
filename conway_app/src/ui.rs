// ui.rs - egui rendering and controls

use std::time::Instant;

use conway::color::{HUE_RANGE, INTENSITY_RANGE, raster};
use conway::patterns;
use eframe::egui;
use egui::{Color32, Rect, Vec2};

use crate::app::GameOfLifeApp;

impl eframe::App for GameOfLifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(Instant::now());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("▶ Play").clicked() {
                    self.play();
                }
                if ui.button("⏸ Pause").clicked() {
                    self.pause();
                }
                if ui.button("🎲 Reset").clicked() {
                    self.reset();
                }

                ui.separator();

                ui.label("Color");
                ui.add(egui::Slider::new(&mut self.state.hue, HUE_RANGE).show_value(false));
                ui.add(egui::Slider::new(&mut self.state.intensity, INTENSITY_RANGE).show_value(false));

                ui.separator();

                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.state.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.state.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(format!("Generation: {}", self.life().generation()));
            });

            let grid = self.life().grid();
            let (rows, cols) = (grid.height() as f32, grid.width() as f32);
            let available = ui.available_size() - Vec2::new(0.0, 24.0);
            let box_size = (available.x / cols).min(available.y / rows).max(1.0);
            let total_size = Vec2::new(box_size * cols, box_size * rows);

            ui.vertical_centered(|ui| {
                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
                let start_pos = response.rect.min;

                let frame = raster(grid, self.state().live_color());
                for (i, rgb) in frame.iter().enumerate() {
                    let (row, col) = (i / grid.width(), i % grid.width());
                    let rect = Rect::from_min_size(
                        start_pos + Vec2::new(col as f32 * box_size, row as f32 * box_size),
                        Vec2::splat(box_size),
                    );
                    painter.rect_filled(rect, 0.0, Color32::from_rgb(rgb.r, rgb.g, rgb.b));
                }
            });

            let live_cells = self.life().population();
            let total = grid.cells().len();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
                if self.state().paused {
                    ui.label("(paused)");
                }
            });
        });

        // Keep the animation timer running, paused or not
        ctx.request_repaint_after(self.interval);
    }
}
