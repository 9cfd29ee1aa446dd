pub mod options;
pub mod panels;
pub mod render_surface;
pub mod surface_state;

pub use options::{
    category_select_options, model_options, style_options, SelectOption, StyleEntry, StyleOptions,
    ALL_CATEGORIES_LABEL, CUSTOM_STYLE_LABEL, NO_STYLE_LABEL,
};
pub use panels::{DebugPanel, ResultCaption, DEFAULT_STYLE_LABEL};
pub use render_surface::{Region, RenderSurface};
pub use surface_state::SurfaceState;
