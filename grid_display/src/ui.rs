// ui.rs - Painting and controls for the placement viewer

use std::collections::HashSet;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use warmth::{Cell, Pos, Summary, patterns};

use crate::GridApp;

fn cell_color(cell: Cell) -> Color32 {
    match cell {
        Cell::Empty      => Color32::from_gray(40),
        Cell::ColdSensor => Color32::from_rgb(60, 120, 230),
        Cell::WarmSensor => Color32::from_rgb(240, 170, 40),
        Cell::Emitter    => Color32::from_rgb(220, 40, 30),
        Cell::Forbidden  => Color32::from_rgb(70, 70, 110),
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Heater Placement");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(
                        patterns::PATTERNS
                            .get(self.selected_pattern)
                            .map_or("", |p| p.name),
                    )
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();
                ui.checkbox(&mut self.show_stamped, "Show forbidden zones");
            });

            ui.separator();
            ui.label("Click a cell to cycle it: empty → cold → warm → emitter.");
            if let Some(err) = &self.error {
                ui.colored_label(Color32::RED, err);
            }
            ui.separator();

            let rows = self.markers.len();
            let cols = self.markers.first().map_or(0, Vec::len);
            let box_size = (720.0 / rows.max(cols).max(1) as f32).clamp(6.0, 40.0);
            let spacing = 0.5;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(
                (box_size + spacing) * cols as f32 - spacing,
                (box_size + spacing) * rows as f32 - spacing,
            )
            .max(Vec2::ZERO);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let flagged: HashSet<Pos> = self.report.flagged().collect();
            let mut clicked = None;

            for display_row in 0..rows {
                for display_col in 0..cols {
                    let pos = Pos::new(display_row + 1, display_col + 1); // Grid is 1-indexed

                    let x = start_pos.x + display_col as f32 * (box_size + spacing);
                    let y = start_pos.y + display_row as f32 * (box_size + spacing);
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell = if self.show_stamped {
                        self.stamped.get(pos)
                    } else {
                        Some(Cell::from_marker(self.markers[display_row][display_col]))
                    };
                    painter.rect_filled(rect, 1.0, cell.map_or(Color32::BLACK, cell_color));

                    if flagged.contains(&pos) {
                        painter.rect_stroke(rect.shrink(1.0), 1.0, Stroke::new(2.0, Color32::GREEN));
                    } else {
                        painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                    }

                    if response.clicked() {
                        if let Some(pointer) = response.interact_pointer_pos() {
                            if rect.contains(pointer) {
                                clicked = Some((display_row, display_col));
                            }
                        }
                    }
                }
            }

            if let Some((row, col)) = clicked {
                self.cycle_marker(row, col);
            }

            ui.separator();

            let summary = match self.report.summary() {
                Summary::Candidates(n) => format!("{n} candidate cells flagged"),
                Summary::AllSufficient => "Every warm sensor is heated".to_owned(),
                Summary::TooCold => warmth::TOO_COLD.to_owned(),
            };
            ui.horizontal(|ui| {
                ui.label(format!("Warm sensors: {}", self.report.entities.len()));
                ui.label(format!("Forbidden: {}", self.stamped.count(Cell::Forbidden)));
                ui.label(summary);
            });

            egui::ScrollArea::vertical().show(ui, |ui| {
                for entity in &self.report.entities {
                    ui.label(format!(
                        "({}) sum {:>4}  {:?}",
                        entity.pos,
                        entity.sum,
                        entity.warmth.band()
                    ));
                }
            });
        });
    }
}
