//! egui front end: controller, UI state and rendering.

/// Navigation, fetch coordination and the stale-response guard.
pub mod controller;
/// Plain state consumed by the renderer.
pub mod state;
/// Rendering of chrome and pages.
pub mod ui;
