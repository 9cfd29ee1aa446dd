pub mod catalog;
pub mod categories;
pub mod config;
pub mod error;
pub mod generation;
pub mod image_client;
pub mod selection;

pub use catalog::{Catalog, CatalogStore, Model, Style};
pub use categories::{
    categories_of, category_options, filter_styles, is_known_category, StyleGroup, StyleListing,
    ALL_CATEGORIES, OTHER_GROUP,
};
pub use config::ClientConfig;
pub use error::{ClientError, ClientErrorKind, FormError};
pub use generation::{
    decode_generate_reply, DebugInfo, FailureKind, GenerateOutcome, GenerateRequest,
    GenerateResponse, GenerationFailure, RequestOutcome, DEFAULT_FAILURE_MESSAGE,
};
pub use image_client::{ImageGenBackend, ImageGenClient};
pub use selection::{CustomStyleInput, SelectionState, CUSTOM_STYLE_ID, NO_STYLE_ID};
