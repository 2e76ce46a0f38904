use std::collections::VecDeque;

use eframe::egui;

use crate::config::TRAIL_FRAMES;

const PANEL_HEIGHT: f32 = 220.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisualizerState {
    Idle,
    Running,
}

/// Spectrum polyline renderer with a fading trail.
///
/// Runs as a cooperative loop: the app calls `begin_frame` once per UI frame
/// and only draws when it returns true. `request_cancel` sets a flag that the
/// next `begin_frame` observes, so no draw ever happens after the frame
/// boundary that follows a cancellation.
pub struct SpectrumVisualizer {
    state: VisualizerState,
    cancel_requested: bool,
    trail: VecDeque<Vec<u8>>,
}

impl SpectrumVisualizer {
    pub fn new() -> Self {
        Self {
            state: VisualizerState::Idle,
            cancel_requested: false,
            trail: VecDeque::with_capacity(TRAIL_FRAMES),
        }
    }

    pub fn start(&mut self) {
        self.cancel_requested = false;
        self.state = VisualizerState::Running;
    }

    pub fn request_cancel(&mut self) {
        self.cancel_requested = true;
    }

    pub fn is_running(&self) -> bool {
        self.state == VisualizerState::Running
    }

    /// Top-of-frame check. Completes a pending cancellation and reports
    /// whether this frame may draw.
    pub fn begin_frame(&mut self) -> bool {
        if self.cancel_requested {
            self.cancel_requested = false;
            self.state = VisualizerState::Idle;
            self.trail.clear();
            return false;
        }
        self.state == VisualizerState::Running
    }

    /// Paints the background only. Shown while idle.
    pub fn draw_idle(&self, ui: &mut egui::Ui) {
        let (rect, painter) = Self::surface(ui);
        painter.rect_filled(rect, 5.0, egui::Color32::from_rgb(15, 15, 15));
    }

    /// Paints one frame. A missing or empty snapshot skips the polyline but
    /// keeps the loop alive.
    pub fn draw(&mut self, ui: &mut egui::Ui, snapshot: Option<&[u8]>) {
        let (rect, painter) = Self::surface(ui);
        painter.rect_filled(rect, 5.0, egui::Color32::from_rgb(15, 15, 15));

        let Some(snapshot) = snapshot.filter(|s| !s.is_empty()) else {
            return;
        };

        // older frames first, dimmer the further back they are
        let depth = self.trail.len();
        for (age, frame) in self.trail.iter().enumerate() {
            let fade = 0.8f32.powi((depth - age) as i32);
            let alpha = (fade * 90.0) as u8;
            let stroke = egui::Stroke::new(
                1.0,
                egui::Color32::from_rgba_unmultiplied(255, 255, 255, alpha),
            );
            painter.add(egui::Shape::line(Self::polyline(rect, frame), stroke));
        }

        painter.add(egui::Shape::line(
            Self::polyline(rect, snapshot),
            egui::Stroke::new(2.0, egui::Color32::WHITE),
        ));

        self.trail.push_back(snapshot.to_vec());
        while self.trail.len() > TRAIL_FRAMES {
            self.trail.pop_front();
        }
    }

    fn surface(ui: &mut egui::Ui) -> (egui::Rect, egui::Painter) {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(width, PANEL_HEIGHT),
            egui::Sense::hover(),
        );
        (rect, ui.painter_at(rect))
    }

    // x is the bin index bounded to the surface width, y scales the byte
    // magnitude over the full height
    fn polyline(rect: egui::Rect, bins: &[u8]) -> Vec<egui::Pos2> {
        let width = rect.width() as usize;
        let scaling = rect.height() / 256.0;

        (0..bins.len().min(width))
            .map(|x| {
                egui::pos2(
                    rect.left() + x as f32,
                    rect.bottom() - bins[x] as f32 * scaling,
                )
            })
            .collect()
    }
}

impl Default for SpectrumVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_until_started() {
        let mut visualizer = SpectrumVisualizer::new();
        assert!(!visualizer.is_running());
        assert!(!visualizer.begin_frame());

        visualizer.start();
        assert!(visualizer.is_running());
        assert!(visualizer.begin_frame());
    }

    #[test]
    fn cancellation_stops_the_loop_at_the_next_frame() {
        let mut visualizer = SpectrumVisualizer::new();
        visualizer.start();
        assert!(visualizer.begin_frame());

        visualizer.request_cancel();
        assert!(!visualizer.begin_frame());
        assert!(!visualizer.is_running());

        // stays idle on later frames
        assert!(!visualizer.begin_frame());
    }

    #[test]
    fn cancellation_clears_the_trail() {
        let mut visualizer = SpectrumVisualizer::new();
        visualizer.start();
        visualizer.trail.push_back(vec![128; 16]);

        visualizer.request_cancel();
        visualizer.begin_frame();
        assert!(visualizer.trail.is_empty());
    }

    #[test]
    fn restart_after_cancel() {
        let mut visualizer = SpectrumVisualizer::new();
        visualizer.start();
        visualizer.request_cancel();
        assert!(!visualizer.begin_frame());

        visualizer.start();
        assert!(visualizer.begin_frame());
    }

    #[test]
    fn polyline_is_bounded_by_surface_width() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 256.0));
        let bins = vec![255u8; 1024];

        let points = SpectrumVisualizer::polyline(rect, &bins);
        assert_eq!(points.len(), 100);
        assert!((points[0].y - 1.0).abs() < 1e-3);
    }
}
