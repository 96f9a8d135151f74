//! daisy-atoms - DaisyUI avatar and Material Symbols icon atoms
//!
//! This crate maps typed component options to DaisyUI / Tailwind class
//! names and renders the resulting HTML fragments with `maud`.

pub mod app;
pub mod config;
pub mod ui;

pub use app::App;
pub use config::Settings;
pub use ui::components::{Avatar, Icon};
