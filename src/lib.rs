//! scatter-rs: headless interactive scatter chart engine.
//!
//! Loads a per-region health table, plots obesity against a switchable x
//! field and animates axis and marker transitions against a host-driven
//! clock. Drawing goes through the backend-agnostic [`render::Renderer`]
//! contract, with an optional cairo backend and GTK4 host.

pub mod chart;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use chart::{ChartConfig, ScatterChart};
pub use error::{ChartError, ChartResult};
