//! # SurfaceState - In-Memory Render Surface
//!
//! A [`RenderSurface`] that only records what is visible. Hosts without a
//! retained UI can diff it against their widgets each frame, and tests assert
//! on it directly.

use crate::options::{SelectOption, StyleOptions};
use crate::panels::{DebugPanel, ResultCaption};
use crate::render_surface::{Region, RenderSurface};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceState {
    pub model_options: Vec<SelectOption>,
    pub category_options: Vec<SelectOption>,
    pub style_options: StyleOptions,

    pub custom_style_visible: bool,
    /// Set when the custom input was focused, cleared when it is hidden
    pub custom_style_focused: bool,
    pub submit_enabled: bool,

    pub loading_visible: bool,
    pub result_visible: bool,
    pub image_url: Option<String>,
    pub caption: Option<ResultCaption>,
    pub error_visible: bool,
    pub error_message: Option<String>,
    pub debug_visible: bool,
    pub debug: Option<DebugPanel>,

    /// Every alert raised, oldest first
    pub alerts: Vec<String>,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            model_options: Vec::new(),
            category_options: Vec::new(),
            style_options: StyleOptions::default(),
            custom_style_visible: false,
            custom_style_focused: false,
            submit_enabled: true,
            loading_visible: false,
            result_visible: false,
            image_url: None,
            caption: None,
            error_visible: false,
            error_message: None,
            debug_visible: false,
            debug: None,
            alerts: Vec::new(),
        }
    }
}

impl SurfaceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Loading => self.loading_visible,
            Region::Result => self.result_visible,
            Region::Error => self.error_visible,
            Region::Debug => self.debug_visible,
        }
    }

    /// Visible regions among loading/result/error (debug excluded)
    pub fn visible_outcome_regions(&self) -> Vec<Region> {
        [Region::Loading, Region::Result, Region::Error]
            .into_iter()
            .filter(|r| self.is_visible(*r))
            .collect()
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.alerts.last().map(String::as_str)
    }
}

impl RenderSurface for SurfaceState {
    fn populate_models(&mut self, options: &[SelectOption]) {
        self.model_options = options.to_vec();
    }

    fn populate_categories(&mut self, options: &[SelectOption]) {
        self.category_options = options.to_vec();
    }

    fn populate_styles(&mut self, options: &StyleOptions) {
        self.style_options = options.clone();
    }

    fn set_custom_style_visible(&mut self, visible: bool) {
        self.custom_style_visible = visible;
        if !visible {
            self.custom_style_focused = false;
        }
    }

    fn focus_custom_style(&mut self) {
        self.custom_style_focused = self.custom_style_visible;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_image(&mut self, url: &str) {
        self.image_url = Some(url.to_string());
    }

    fn set_result_caption(&mut self, caption: &ResultCaption) {
        self.caption = Some(caption.clone());
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
        self.error_visible = true;
    }

    fn hide_error(&mut self) {
        self.error_visible = false;
    }

    fn show_debug(&mut self, panel: &DebugPanel) {
        self.debug = Some(panel.clone());
        self.debug_visible = true;
    }

    fn hide_debug(&mut self) {
        self.debug_visible = false;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
