//! Catalog — the models and styles the server makes selectable
//!
//! The catalog is fetched once per session from `GET /config` and never
//! mutated afterwards. Everything else (category index, selection defaults,
//! control population) is derived from it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ClientError;
use crate::image_client::ImageGenBackend;

// ─── Model ────────────────────────────────────────────────────────────────────

/// A generation backend variant offered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Stable identifier sent back as `model_id` (e.g. "model_2")
    pub id: String,
    /// Display name
    pub name: String,
}

impl Model {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ─── Style ────────────────────────────────────────────────────────────────────

/// A visual style preset offered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub id: String,
    pub name: String,
    /// Optional category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Style {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Category label, with an empty string treated as no group
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }
}

// ─── Catalog ──────────────────────────────────────────────────────────────────

/// Models and styles as returned by `GET /config`.
///
/// Either array may be missing or `null` on the wire; both decode to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub models: Vec<Model>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub styles: Vec<Style>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Catalog {
    pub fn new(models: Vec<Model>, styles: Vec<Style>) -> Self {
        Self { models, styles }
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.styles.is_empty()
    }

    pub fn model(&self, id: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.id == id)
    }

    pub fn style(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// The model selected on load: `preferred` when the catalog has it,
    /// otherwise the first model, or `None` for an empty list.
    pub fn default_model_id(&self, preferred: &str) -> Option<&str> {
        self.model(preferred)
            .or_else(|| self.models.first())
            .map(|m| m.id.as_str())
    }
}

// ─── Store ────────────────────────────────────────────────────────────────────

/// Holds the catalog for the lifetime of a session.
///
/// Created empty and fetched at most once. A failed load leaves the store
/// empty for the rest of the session; later calls do not retry it.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
    loaded: bool,
    attempted: bool,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the catalog from the server.
    ///
    /// Only the first call reaches the backend; later calls return `Ok(())`
    /// whether or not that first fetch succeeded.
    pub async fn load<B: ImageGenBackend + ?Sized>(&mut self, backend: &B) -> Result<(), ClientError> {
        if self.attempted {
            log::warn!("CatalogStore: catalog load already attempted, ignoring reload");
            return Ok(());
        }
        self.attempted = true;

        match backend.fetch_config().await {
            Ok(catalog) => {
                log::info!(
                    "CatalogStore: loaded {} models and {} styles",
                    catalog.models.len(),
                    catalog.styles.len()
                );
                self.catalog = catalog;
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                log::error!("CatalogStore: failed to load configuration: {}", e);
                Err(e)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True once `load` has run, successful or not
    pub fn load_attempted(&self) -> bool {
        self.attempted
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn models(&self) -> &[Model] {
        &self.catalog.models
    }

    pub fn styles(&self) -> &[Style] {
        &self.catalog.styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientErrorKind;
    use crate::generation::{GenerateOutcome, GenerateRequest};
    use futures::future::BoxFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts fetches; fails when no catalog is configured.
    struct CountingBackend {
        catalog: Option<Catalog>,
        fetches: AtomicUsize,
    }

    impl ImageGenBackend for CountingBackend {
        fn fetch_config(&self) -> BoxFuture<'_, Result<Catalog, ClientError>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            let result = self
                .catalog
                .clone()
                .ok_or_else(|| ClientError::new(ClientErrorKind::Network, "connection refused"));
            Box::pin(async move { result })
        }

        fn generate(&self, _request: GenerateRequest) -> BoxFuture<'_, GenerateOutcome> {
            Box::pin(async { GenerateOutcome::Failure("unused".into()) })
        }
    }

    #[tokio::test]
    async fn test_store_loads_once() {
        let backend = CountingBackend {
            catalog: Some(Catalog::new(vec![Model::new("model_1", "A")], vec![])),
            fetches: AtomicUsize::new(0),
        };
        let mut store = CatalogStore::new();
        store.load(&backend).await.unwrap();
        store.load(&backend).await.unwrap();

        assert!(store.is_loaded());
        assert_eq!(store.models().len(), 1);
        assert_eq!(backend.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_store_empty() {
        let backend = CountingBackend {
            catalog: None,
            fetches: AtomicUsize::new(0),
        };
        let mut store = CatalogStore::new();
        let err = store.load(&backend).await.unwrap_err();

        assert_eq!(err.kind(), ClientErrorKind::Network);
        assert!(!store.is_loaded());
        assert!(store.load_attempted());
        assert!(store.catalog().is_empty());
    }

    #[tokio::test]
    async fn test_failed_load_is_not_retried() {
        let backend = CountingBackend {
            catalog: None,
            fetches: AtomicUsize::new(0),
        };
        let mut store = CatalogStore::new();
        assert!(store.load(&backend).await.is_err());
        assert!(store.load(&backend).await.is_ok());

        assert_eq!(backend.fetches.load(Ordering::SeqCst), 1);
        assert!(!store.is_loaded());
        assert!(store.catalog().is_empty());
    }

    #[test]
    fn test_decode_with_missing_and_null_arrays() {
        let catalog: Catalog = serde_json::from_str(r#"{"models": null}"#).unwrap();
        assert!(catalog.is_empty());

        let catalog: Catalog = serde_json::from_str(
            r#"{"models":[{"id":"model_1","name":"A"}],"styles":[{"id":"s1","name":"Sketch","group":"Art"}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.models, vec![Model::new("model_1", "A")]);
        assert_eq!(catalog.styles[0].group(), Some("Art"));
    }

    #[test]
    fn test_empty_group_is_no_group() {
        let style: Style = serde_json::from_str(r#"{"id":"x","name":"X","group":""}"#).unwrap();
        assert_eq!(style.group(), None);
    }

    #[test]
    fn test_default_model_prefers_well_known_id() {
        let catalog = Catalog::new(
            vec![Model::new("model_1", "A"), Model::new("model_2", "B")],
            vec![],
        );
        assert_eq!(catalog.default_model_id("model_2"), Some("model_2"));
    }

    #[test]
    fn test_default_model_falls_back_to_first() {
        let catalog = Catalog::new(vec![Model::new("flux", "FLUX"), Model::new("zimage", "Z")], vec![]);
        assert_eq!(catalog.default_model_id("model_2"), Some("flux"));
        assert_eq!(Catalog::default().default_model_id("model_2"), None);
    }
}
