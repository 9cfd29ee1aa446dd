//! User events the generate form reacts to, and the controls a deployment exposes.

/// Actions dispatched by the host when the user touches a control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// Pick a model from the model selector
    SelectModel(String),
    /// Pick a category filter ("all" or a style group)
    SelectCategory(String),
    /// Pick a style id, including the synthesized "none" and "custom"
    SelectStyle(String),
    /// Edit the custom-style text input
    EditCustomStyle(String),
    /// Edit the prompt text area
    EditPrompt(String),
    /// Edit the access code field
    EditAccessCode(String),
}

/// Which optional controls exist on the page.
///
/// Request fields and control population follow these flags: a missing
/// control is never populated and its field is never sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormControls {
    pub model_select: bool,
    pub style_select: bool,
    pub category_select: bool,
    pub access_code: bool,
    pub custom_style: bool,
}

impl Default for FormControls {
    fn default() -> Self {
        Self::full()
    }
}

impl FormControls {
    /// Every control present
    pub const fn full() -> Self {
        Self {
            model_select: true,
            style_select: true,
            category_select: true,
            access_code: true,
            custom_style: true,
        }
    }

    /// Only the model and style selectors
    pub const fn basic() -> Self {
        Self {
            model_select: true,
            style_select: true,
            category_select: false,
            access_code: false,
            custom_style: false,
        }
    }

    pub fn with_category_select(mut self, enabled: bool) -> Self {
        self.category_select = enabled;
        self
    }

    pub fn with_access_code(mut self, enabled: bool) -> Self {
        self.access_code = enabled;
        self
    }

    pub fn with_custom_style(mut self, enabled: bool) -> Self {
        self.custom_style = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_builder() {
        let controls = FormControls::basic().with_access_code(true);
        assert!(controls.model_select);
        assert!(controls.access_code);
        assert!(!controls.category_select);
        assert!(!controls.custom_style);
        assert_eq!(FormControls::default(), FormControls::full());
    }
}
