//! # RenderSurface - Write-Only View of the Generate Form
//!
//! The controller never looks up UI elements. It pushes state through this
//! trait, and each host (web page bridge, native toolkit, test double)
//! decides how to draw it.
//!
//! ## Regions
//!
//! ```text
//! ┌ controls ──────────────────────────────┐
//! │ model ▾  category ▾  style ▾  [custom] │
//! │ prompt ........................ [Go]   │
//! └────────────────────────────────────────┘
//!   loading │ result (image + caption) │ error     <- at most one visible
//!   debug                                         <- independent of the above
//! ```
//!
//! Implementations should be pure reflection: every call maps to one visible
//! change and no call reads state back.

use crate::options::{SelectOption, StyleOptions};
use crate::panels::{DebugPanel, ResultCaption};

/// Named regions of the form output area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Loading,
    Result,
    Error,
    Debug,
}

pub trait RenderSurface {
    // ── Controls ─────────────────────────────────────────────────────────────

    fn populate_models(&mut self, options: &[SelectOption]);

    /// Only called when the deployment has a category selector
    fn populate_categories(&mut self, options: &[SelectOption]);

    fn populate_styles(&mut self, options: &StyleOptions);

    fn set_custom_style_visible(&mut self, visible: bool);

    /// Move keyboard focus to the custom-style input
    fn focus_custom_style(&mut self);

    fn set_submit_enabled(&mut self, enabled: bool);

    // ── Output regions ───────────────────────────────────────────────────────

    fn set_loading(&mut self, visible: bool);

    fn set_image(&mut self, url: &str);

    fn set_result_caption(&mut self, caption: &ResultCaption);

    fn set_result_visible(&mut self, visible: bool);

    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    fn show_debug(&mut self, panel: &DebugPanel);

    fn hide_debug(&mut self);

    // ── Notices ──────────────────────────────────────────────────────────────

    /// Blocking notice (config load failure, empty prompt)
    fn alert(&mut self, message: &str);
}
