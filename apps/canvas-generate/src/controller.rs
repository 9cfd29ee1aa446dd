use canvas_data::{
    is_known_category, CatalogStore, ClientConfig, FormError, GenerateOutcome, GenerateRequest,
    ImageGenBackend, RequestOutcome, SelectionState,
};
use canvas_widgets::{
    category_select_options, model_options, style_options, DebugPanel, RenderSurface,
    ResultCaption, StyleOptions,
};

use crate::actions::{FormAction, FormControls};

/// Drives the generate form: catalog load, selection changes and submissions.
///
/// All state lives here and is touched from one thread of control. The
/// backend call in [`GenerateController::submit`] is the only suspension
/// point; while it is outstanding the submit control stays disabled, which
/// is the only thing preventing a second request.
///
/// # Usage
///
/// ```rust,ignore
/// let mut controller = GenerateController::new(client, surface, FormControls::full(), &config);
/// let _ = controller.load().await;
///
/// controller.handle_action(&FormAction::EditPrompt("a cat".into()));
/// controller.handle_action(&FormAction::SelectStyle("watercolor".into()));
/// let _ = controller.submit().await;
/// ```
///
/// Hosts with their own event loop can call [`GenerateController::begin_submit`],
/// dispatch the request themselves and feed the reply to
/// [`GenerateController::complete_submit`].
pub struct GenerateController<B, S> {
    backend: B,
    surface: S,
    controls: FormControls,

    /// Model selected on load when the catalog has it
    preferred_model: String,

    catalog: CatalogStore,
    selection: SelectionState,

    prompt: String,
    access_code: String,

    outcome: RequestOutcome,
    submit_enabled: bool,
}

impl<B: ImageGenBackend, S: RenderSurface> GenerateController<B, S> {
    pub fn new(backend: B, surface: S, controls: FormControls, config: &ClientConfig) -> Self {
        Self {
            backend,
            surface,
            controls,
            preferred_model: config.default_model_id.clone(),
            catalog: CatalogStore::new(),
            selection: SelectionState::default(),
            prompt: String::new(),
            access_code: String::new(),
            outcome: RequestOutcome::Idle,
            submit_enabled: true,
        }
    }

    // ── Startup ──────────────────────────────────────────────────────────────

    /// Fetch the catalog once and populate the selectors.
    ///
    /// On failure the catalog stays empty, one alert is raised and the error
    /// is returned for logging. Later calls neither refetch nor alert again.
    pub async fn load(&mut self) -> Result<(), FormError> {
        if self.catalog.load_attempted() {
            log::warn!("GenerateController: catalog load already attempted");
            return Ok(());
        }

        if let Err(e) = self.catalog.load(&self.backend).await {
            let err = FormError::ConfigLoad(e);
            self.surface.alert(&err.user_message());
            return Err(err);
        }

        self.selection = SelectionState::from_catalog(self.catalog.catalog(), &self.preferred_model);
        log::info!(
            "GenerateController: ready with model {:?}",
            self.selection.model_id
        );
        self.populate_controls();
        Ok(())
    }

    fn populate_controls(&mut self) {
        if self.controls.model_select {
            let options = model_options(self.catalog.models(), self.selection.model_id.as_deref());
            self.surface.populate_models(&options);
        }
        if self.controls.category_select {
            let options = category_select_options(self.catalog.styles(), &self.selection.category_filter);
            self.surface.populate_categories(&options);
        }
        if self.controls.style_select {
            let options = self.current_style_options();
            self.surface.populate_styles(&options);
        }
        self.surface.set_custom_style_visible(false);
    }

    fn current_style_options(&self) -> StyleOptions {
        style_options(
            self.catalog.styles(),
            &self.selection.category_filter,
            &self.selection.style_id,
            self.controls.custom_style,
        )
    }

    // ── User events ──────────────────────────────────────────────────────────

    /// Apply one user event.
    ///
    /// Changes made through a selector are not echoed back to that selector;
    /// only a category change rebuilds the style list.
    pub fn handle_action(&mut self, action: &FormAction) {
        match action {
            FormAction::SelectModel(model_id) => self.select_model(model_id),
            FormAction::SelectCategory(category) => self.select_category(category),
            FormAction::SelectStyle(style_id) => self.select_style(style_id),
            FormAction::EditCustomStyle(text) => self.selection.set_custom_style_text(text.as_str()),
            FormAction::EditPrompt(text) => self.prompt = text.clone(),
            FormAction::EditAccessCode(text) => self.access_code = text.clone(),
        }
    }

    fn select_model(&mut self, model_id: &str) {
        if !self.selection.select_model(self.catalog.catalog(), model_id) {
            log::warn!("Ignoring selection of unknown model {}", model_id);
        }
    }

    fn select_style(&mut self, style_id: &str) {
        // Only styles in the rendered list can be picked
        if !self.current_style_options().values().contains(&style_id) {
            log::warn!("Ignoring selection of unlisted style {}", style_id);
            return;
        }

        let reveal = self.selection.select_style(style_id).is_revealed() && self.controls.custom_style;
        self.surface.set_custom_style_visible(reveal);
        if reveal {
            self.surface.focus_custom_style();
        }
    }

    fn select_category(&mut self, category: &str) {
        if !self.controls.category_select {
            log::warn!("Ignoring category change: no category selector");
            return;
        }
        if !is_known_category(self.catalog.styles(), category) {
            log::warn!("Ignoring selection of unknown category {}", category);
            return;
        }

        self.selection.select_category(category);
        let options = self.current_style_options();
        self.surface.populate_styles(&options);
        self.surface.set_custom_style_visible(false);
        log::debug!(
            "Category {} shows {} style options",
            category,
            options.options().len()
        );
    }

    // ── Submission ───────────────────────────────────────────────────────────

    /// Validate, switch the surface to loading and send one generation request.
    ///
    /// `Err` is either a rejection before anything was sent (empty prompt,
    /// request already in flight) or the server/transport failure that has
    /// already been shown in the error region.
    pub async fn submit(&mut self) -> Result<(), FormError> {
        let request = self.begin_submit()?;
        let outcome = self.backend.generate(request).await;
        self.complete_submit(outcome)
    }

    /// First half of [`GenerateController::submit`]: checks preconditions,
    /// enters `Pending` and returns the request to dispatch.
    pub fn begin_submit(&mut self) -> Result<GenerateRequest, FormError> {
        if !self.submit_enabled {
            log::debug!("Submit ignored: a generation request is in flight");
            return Err(FormError::SubmitInFlight);
        }

        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            let err = FormError::Validation;
            self.surface.alert(&err.user_message());
            return Err(err);
        }

        let request = self.build_request(prompt);

        self.submit_enabled = false;
        self.surface.set_submit_enabled(false);
        self.surface.set_result_visible(false);
        self.surface.hide_error();
        self.surface.hide_debug();
        self.surface.set_loading(true);
        self.outcome = RequestOutcome::Pending;

        log::info!(
            "Submitting generation: model={:?}, style={:?}",
            request.model_id,
            request.style_id
        );
        Ok(request)
    }

    fn build_request(&self, prompt: String) -> GenerateRequest {
        let controls = self.controls;
        let custom_style = if controls.style_select && controls.custom_style {
            self.selection.custom_style().map(str::to_string)
        } else {
            None
        };

        GenerateRequest {
            prompt,
            model_id: if controls.model_select {
                self.selection.model_id.clone()
            } else {
                None
            },
            style_id: controls.style_select.then(|| self.selection.style_id.clone()),
            access_code: controls.access_code.then(|| self.access_code.trim().to_string()),
            custom_style,
        }
    }

    /// Second half of [`GenerateController::submit`]: renders the reply and
    /// re-enables the form. Replies arriving while nothing is pending are dropped.
    pub fn complete_submit(&mut self, outcome: GenerateOutcome) -> Result<(), FormError> {
        if !self.outcome.is_pending() {
            log::warn!("Dropping generation reply: no request is pending");
            return Ok(());
        }

        if let GenerateOutcome::TransportFault(fault) = &outcome {
            log::error!("Generation transport fault: {} ({:?})", fault, fault.kind());
        }

        let outcome = RequestOutcome::from(outcome);
        let result = match &outcome {
            RequestOutcome::Success(response) => {
                self.surface.set_image(&response.image_url);
                self.surface
                    .set_result_caption(&ResultCaption::from_response(response));
                match DebugPanel::from_response(response) {
                    Some(panel) => self.surface.show_debug(&panel),
                    None => self.surface.hide_debug(),
                }
                self.surface.set_result_visible(true);
                log::info!("Generated image {}", response.image_url);
                Ok(())
            }
            RequestOutcome::Failure(failure) => {
                self.surface.show_error(&failure.message);
                Err(failure.to_error())
            }
            RequestOutcome::Idle | RequestOutcome::Pending => Ok(()),
        };
        self.outcome = outcome;

        self.submit_enabled = true;
        self.surface.set_submit_enabled(true);
        self.surface.set_loading(false);
        result
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    pub fn controls(&self) -> FormControls {
        self.controls
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
