pub mod bands;
pub mod filter;
pub mod gain_curve;
pub mod graph;
pub mod noise;

pub use gain_curve::GainCurve;
pub use graph::NoiseGraph;
