//! Launch records dashboard.
//!
//! [`data`] is the rendering-independent core: loading, site/payload
//! filtering and chart aggregation. Everything else is the egui front-end
//! that turns the core's chart data into figures.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
