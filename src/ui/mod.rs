pub mod controls;
pub mod spectrum;

pub use controls::{ControlValues, ControlsChanged, draw_controls};
pub use spectrum::SpectrumVisualizer;
