mod component;
pub mod config;
mod error;
mod generator;
mod geometry;
mod interaction;
mod model;
mod render;
mod state;
mod types;

pub use component::GraphEditorCanvas;
pub use config::Sizing;
