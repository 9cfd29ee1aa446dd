//! Text shown in the result and debug regions.

use canvas_data::GenerateResponse;

/// Label used when the server does not report a style
pub const DEFAULT_STYLE_LABEL: &str = "Default";

/// Caption under the generated image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCaption {
    pub model: String,
    pub style: String,
}

impl ResultCaption {
    pub fn from_response(response: &GenerateResponse) -> Self {
        Self {
            model: response.model_used.clone(),
            style: response
                .style_used
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_STYLE_LABEL)
                .to_string(),
        }
    }
}

/// Contents of the debug region
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugPanel {
    pub original_prompt: String,
    pub final_prompt: String,
    pub time_elapsed: String,
    pub estimated_tokens: String,
}

impl DebugPanel {
    /// `None` unless the response carries `debug_info`
    pub fn from_response(response: &GenerateResponse) -> Option<Self> {
        let debug = response.debug_info.as_ref()?;
        Some(Self {
            original_prompt: response.original_prompt.clone().unwrap_or_default(),
            final_prompt: response.final_prompt.clone().unwrap_or_default(),
            time_elapsed: debug.time_elapsed.clone(),
            estimated_tokens: debug.estimated_tokens.clone(),
        })
    }
}
