//! The image generation form: catalog-driven selectors and the submit cycle.

pub mod actions;
pub mod controller;

pub use actions::{FormAction, FormControls};
pub use controller::GenerateController;
