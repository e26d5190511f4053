//! # Visualization
//!
//! Client facade for the visualization measure/dimension lookup: the
//! [`Measure`] value object plus the dimension fetch that goes with it.
//!
//! Independent of the pipeline facade; the two share only the contracts
//! and transport crates.

mod client;
mod dimension;
mod measure;

pub use client::{GetDimensions, VisualizationClient};
pub use dimension::Dimension;
pub use measure::{Measure, MeasureConfig};
