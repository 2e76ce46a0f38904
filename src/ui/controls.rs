use eframe::egui;

use crate::config::{ANGLE_MAX, ANGLE_MIN, CENTER_MAX, CENTER_MIN};

/// Slider values mirrored from the shared audio state.
pub struct ControlValues {
    pub angle: f32,
    pub center: f32,
    pub volume: f32,
}

#[derive(Default)]
pub struct ControlsChanged {
    pub shape: bool,
    pub volume: bool,
}

/// Draws the depth/cut/volume sliders and reports what moved.
pub fn draw_controls(ui: &mut egui::Ui, values: &mut ControlValues) -> ControlsChanged {
    let mut changed = ControlsChanged::default();

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            let response = ui.add(
                egui::Slider::new(&mut values.angle, ANGLE_MIN..=ANGLE_MAX)
                    .step_by(1.0)
                    .text("depth"),
            );
            if response.changed() {
                changed.shape = true;
            }
        });

        ui.vertical(|ui| {
            let response = ui.add(
                egui::Slider::new(&mut values.center, CENTER_MIN..=CENTER_MAX)
                    .step_by(0.01)
                    .text("cut"),
            );
            if response.changed() {
                changed.shape = true;
            }
        });

        ui.vertical(|ui| {
            let response = ui.add(
                egui::Slider::new(&mut values.volume, 0.0..=100.0)
                    .integer()
                    .text("vol"),
            );
            if response.changed() {
                changed.volume = true;
            }
        });
    });

    changed
}
