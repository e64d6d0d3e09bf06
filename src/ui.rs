// src/ui.rs

use std::ops::RangeInclusive;

use chaos_game::Settings;

/// Slider-backed values shown in the control window.
pub struct ControlPanel {
    pub vertex_count: usize,
    pub multiplier: f64,
    pub paused: bool,
    vertex_range: RangeInclusive<usize>,
    multiplier_step: f64,
}

/// What the user touched during one frame.
#[derive(Default, Debug)]
pub struct UiChanges {
    pub vertex_count: Option<usize>,
    pub multiplier: Option<f64>,
    pub pause_toggled: bool,
    pub clear_requested: bool,
}

/// Read-only readouts for the panel.
pub struct PanelStatus {
    pub ticks: u64,
    pub tick_rate: f64,
    pub seed: Option<u64>,
}

impl ControlPanel {
    pub fn new(settings: &Settings) -> Self {
        Self {
            vertex_count: settings.default_vertex_count,
            multiplier: settings.default_multiplier,
            paused: false,
            vertex_range: settings.vertex_range.clone(),
            multiplier_step: settings.multiplier_step,
        }
    }
}

pub fn build_ui(ctx: &egui::Context, panel: &mut ControlPanel, status: &PanelStatus) -> UiChanges {
    let mut changes = UiChanges::default();

    egui::Window::new("Controls")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                let edges = ui.add(
                    egui::Slider::new(&mut panel.vertex_count, panel.vertex_range.clone())
                        .text("Edges")
                        .integer(),
                );
                if edges.changed() {
                    changes.vertex_count = Some(panel.vertex_count);
                }

                let multiplier = ui.add(
                    egui::Slider::new(&mut panel.multiplier, 0.0..=1.0)
                        .text("Multiplier")
                        .step_by(panel.multiplier_step),
                );
                if multiplier.changed() {
                    changes.multiplier = Some(panel.multiplier);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.checkbox(&mut panel.paused, "Pause").changed() {
                        changes.pause_toggled = true;
                    }
                    if ui.button("Clear").clicked() {
                        changes.clear_requested = true;
                    }
                });

                ui.separator();
                ui.label(format!("Ticks: {}", status.ticks));
                ui.label(format!("Rate: {:.0} ticks/s", status.tick_rate));
                match status.seed {
                    Some(seed) => ui.label(format!("Seed: {seed}")),
                    None => ui.label("Seed: random"),
                };
                ui.label("Space: pause   C: clear   Esc: quit");
            });
        });

    changes
}
