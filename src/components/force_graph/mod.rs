//! Force-directed canvas for the simulated cluster mesh.

mod component;
mod render;
mod state;

pub use component::ClusterCanvas;
