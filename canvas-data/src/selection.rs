//! Selection state for the generate form.

use crate::catalog::Catalog;
use crate::categories::ALL_CATEGORIES;

/// Synthesized style id meaning "apply no style"
pub const NO_STYLE_ID: &str = "none";

/// Synthesized style id meaning "use the free-text custom style"
pub const CUSTOM_STYLE_ID: &str = "custom";

/// Visibility of the custom-style text input after a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomStyleInput {
    Hidden,
    /// Shown and focused
    Revealed,
}

impl CustomStyleInput {
    pub fn is_revealed(self) -> bool {
        self == CustomStyleInput::Revealed
    }
}

/// The user's current choices.
///
/// `custom_style_text` is kept while other styles are selected but only
/// takes effect when `style_id` is [`CUSTOM_STYLE_ID`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub model_id: Option<String>,
    pub style_id: String,
    pub custom_style_text: String,
    pub category_filter: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            model_id: None,
            style_id: NO_STYLE_ID.to_string(),
            custom_style_text: String::new(),
            category_filter: ALL_CATEGORIES.to_string(),
        }
    }
}

impl SelectionState {
    /// Defaults for a freshly loaded catalog
    pub fn from_catalog(catalog: &Catalog, preferred_model: &str) -> Self {
        Self {
            model_id: catalog.default_model_id(preferred_model).map(str::to_string),
            ..Default::default()
        }
    }

    /// Select a style. Only [`CUSTOM_STYLE_ID`] reveals the custom input.
    pub fn select_style(&mut self, style_id: &str) -> CustomStyleInput {
        self.style_id = style_id.to_string();
        if style_id == CUSTOM_STYLE_ID {
            CustomStyleInput::Revealed
        } else {
            CustomStyleInput::Hidden
        }
    }

    /// Switch the category filter.
    ///
    /// The style list is rebuilt for the new filter, so the selection falls
    /// back to its first entry ("no style") and the custom input collapses,
    /// even when the previous style would still be listed.
    pub fn select_category(&mut self, category: &str) -> CustomStyleInput {
        self.category_filter = category.to_string();
        self.style_id = NO_STYLE_ID.to_string();
        CustomStyleInput::Hidden
    }

    /// Select a model; ids missing from the catalog are rejected.
    pub fn select_model(&mut self, catalog: &Catalog, model_id: &str) -> bool {
        if catalog.model(model_id).is_none() {
            return false;
        }
        self.model_id = Some(model_id.to_string());
        true
    }

    pub fn set_custom_style_text(&mut self, text: impl Into<String>) {
        self.custom_style_text = text.into();
    }

    pub fn is_custom_style(&self) -> bool {
        self.style_id == CUSTOM_STYLE_ID
    }

    /// Trimmed custom text, only when the custom style is selected and non-empty
    pub fn custom_style(&self) -> Option<&str> {
        if !self.is_custom_style() {
            return None;
        }
        Some(self.custom_style_text.trim()).filter(|t| !t.is_empty())
    }
}
