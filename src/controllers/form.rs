//! Generic entity form controller (create / edit).
//!
//! Mode is derived once at activation from the navigation context. Edit
//! mode pins the identifier captured when the record was loaded; later
//! field edits can never redirect the update to another record.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::interaction::Interaction;
use crate::models::{Entity, EntityForm};
use crate::navigation::Navigator;

/// Whether the form creates a new record or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// Form view state for one entity: the editable draft plus submit/cancel.
pub struct FormController<F: EntityForm> {
    api: ApiClient,
    interaction: Arc<dyn Interaction>,
    navigator: Arc<dyn Navigator>,
    mode: FormMode,
    fields: F,
}

impl<F: EntityForm> FormController<F> {
    pub fn new(
        api: ApiClient,
        interaction: Arc<dyn Interaction>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            interaction,
            navigator,
            mode: FormMode::Create,
            fields: F::default(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    /// Derive the mode from the navigation context and, when editing, load
    /// the record into the draft. A failed load redirects back to the list
    /// with a notice — the form is never shown half-populated.
    pub async fn activate(&mut self, id: Option<&str>) {
        self.fields = F::default();
        self.mode = FormMode::Create;

        let Some(id) = id else { return };
        match self.api.fetch_one::<F::Record>(F::Record::PATH, id).await {
            Ok(record) => {
                self.fields = F::from_record(&record);
                self.mode = FormMode::Edit(id.to_string());
            }
            Err(err) => {
                warn!(entity = F::Record::PATH, id, %err, "record load failed");
                self.interaction.alert(F::TEXT.load_error);
                self.navigator.navigate(F::Record::list_route());
            }
        }
    }

    /// Normalise and submit the draft. Client-side validation failures and
    /// server rejections leave every field as typed for correction.
    pub async fn submit(&mut self) {
        let payload = match self.fields.to_payload() {
            Ok(payload) => payload,
            Err(notice) => {
                self.interaction.alert(&notice);
                return;
            }
        };

        let result = match &self.mode {
            FormMode::Create => self.api.create(F::Record::PATH, &payload).await,
            FormMode::Edit(id) => self.api.update(F::Record::PATH, id, &payload).await,
        };

        match result {
            Ok(()) => {
                info!(entity = F::Record::PATH, mode = ?self.mode, "record saved");
                let notice = if matches!(self.mode, FormMode::Create) {
                    F::TEXT.created
                } else {
                    F::TEXT.updated
                };
                self.interaction.alert(notice);
                self.navigator.navigate(F::Record::list_route());
            }
            Err(err) => {
                let detail = err.mensaje().unwrap_or("Operación fallida");
                self.interaction.alert(&format!("Error: {detail}"));
            }
        }
    }

    /// Discard in-progress edits and return to the list, no confirmation.
    pub fn cancel(&self) {
        self.navigator.navigate(F::Record::list_route());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
