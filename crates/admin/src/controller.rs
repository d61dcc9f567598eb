//! The form/list controller every resource page instantiates.
//!
//! A controller owns one page's list, loading flag and [`FormState`].
//! List reloads after a mutation always run after the mutating call has
//! resolved, never alongside it. Late responses are not cancelled: the
//! `&mut self` receivers serialize every operation on one page.

use std::sync::Arc;

use myron_client::api::ApiError;
use myron_client::resources::ResourceService;
use myron_core::error::CoreError;
use myron_core::form::FormState;
use myron_core::image::ImageUpload;
use myron_core::resource::{Draft, FormMode, Resource, ResourceKind};
use myron_core::types::DbId;

use crate::prompt::Prompter;

/// What to do when a delete request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePolicy {
    /// Log the failure and carry on as if the delete had gone through.
    /// The list is reloaded either way.
    pub ignore_delete_errors: bool,
}

impl Default for DeletePolicy {
    fn default() -> Self {
        Self {
            ignore_delete_errors: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// A client-side rule failed; nothing was sent.
    #[error(transparent)]
    Validation(CoreError),

    /// The backend rejected the request or could not be reached.
    #[error("{kind} save failed: {source}")]
    Request {
        kind: ResourceKind,
        #[source]
        source: ApiError,
    },

    /// No form is open, or it is open in view mode.
    #[error(transparent)]
    NotSubmittable(CoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The delete was sent and the list reloaded.
    Deleted,
}

pub struct FormListController<R: Resource> {
    service: Arc<dyn ResourceService<R>>,
    prompter: Arc<dyn Prompter>,
    policy: DeletePolicy,
    items: Vec<R>,
    loading: bool,
    form: FormState<R::Draft>,
}

impl<R: Resource> FormListController<R> {
    /// A freshly mounted page: listing, with its first load pending.
    pub fn new(service: Arc<dyn ResourceService<R>>, prompter: Arc<dyn Prompter>) -> Self {
        Self {
            service,
            prompter,
            policy: DeletePolicy::default(),
            items: Vec::new(),
            loading: true,
            form: FormState::Listing,
        }
    }

    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn kind(&self) -> ResourceKind {
        R::KIND
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn form(&self) -> &FormState<R::Draft> {
        &self.form
    }

    // ---- list ----

    /// Fetch the list. Failures are logged and collapse the list to empty.
    pub async fn load(&mut self) {
        self.loading = true;
        self.items = match self.service.list().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(resource = %R::KIND, error = %e, "List fetch failed");
                Vec::new()
            }
        };
        self.loading = false;
    }

    // ---- form transitions ----

    pub fn open_add(&mut self) {
        self.form.open_add();
    }

    pub fn open_view(&mut self, id: DbId) -> Result<(), CoreError> {
        let row = find_row(&self.items, id)?;
        self.form.open_view(row);
        Ok(())
    }

    pub fn open_edit(&mut self, id: DbId) -> Result<(), CoreError> {
        let row = find_row(&self.items, id)?;
        self.form.open_edit(row);
        Ok(())
    }

    /// Close the form without any network call.
    pub fn back(&mut self) {
        self.form.close();
    }

    pub fn draft_mut(&mut self) -> Result<&mut R::Draft, CoreError> {
        self.form.draft_mut()
    }

    pub fn apply_input(&mut self, field: &str, raw: &str) -> Result<(), CoreError> {
        self.form.draft_mut()?.apply_input(field, raw)
    }

    pub fn set_image(&mut self, upload: ImageUpload) -> Result<(), CoreError> {
        self.form.draft_mut()?.set_image(upload)
    }

    // ---- mutations ----

    /// Validate the draft and send it.
    ///
    /// Validation failures are shown to the user and nothing is sent.
    /// Request failures keep the form open, show a generic notice and log
    /// the cause. On success the form closes and the list reloads.
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let FormState::Open { mode, draft } = &self.form else {
            return Err(SubmitError::NotSubmittable(CoreError::FormClosed));
        };
        let mode = *mode;
        if mode.is_read_only() {
            return Err(SubmitError::NotSubmittable(CoreError::ReadOnly));
        }

        let payload = match draft.prepare(mode) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(resource = %R::KIND, error = %e, "Submit rejected by validation");
                self.prompter.alert(&e.user_message());
                return Err(SubmitError::Validation(e));
            }
        };

        let result = match mode {
            FormMode::Edit => {
                let id = draft.id().ok_or_else(|| {
                    SubmitError::NotSubmittable(CoreError::InvalidInput {
                        field: "id",
                        message: "edited record has no id".to_string(),
                    })
                })?;
                self.service.update(id, payload).await
            }
            _ => self.service.create(payload).await,
        };

        if let Err(e) = result {
            tracing::error!(resource = %R::KIND, %mode, error = %e, "Save failed");
            self.prompter.alert(&R::KIND.save_failed_message());
            return Err(SubmitError::Request {
                kind: R::KIND,
                source: e,
            });
        }

        tracing::info!(resource = %R::KIND, %mode, "Saved");
        self.form.close();
        self.load().await;
        Ok(())
    }

    /// Delete a row after explicit confirmation, then reload the list.
    ///
    /// With [`DeletePolicy::ignore_delete_errors`] a failed request is only
    /// logged. Otherwise the user is notified and the error returned, after
    /// the reload.
    pub async fn delete(&mut self, id: DbId) -> Result<DeleteOutcome, ApiError> {
        if !self.prompter.confirm(&R::KIND.confirm_delete_message()) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let result = self.service.delete(id).await;
        if let Err(e) = &result {
            if self.policy.ignore_delete_errors {
                tracing::warn!(resource = %R::KIND, id, error = %e, "Delete failed, ignoring");
            } else {
                tracing::error!(resource = %R::KIND, id, error = %e, "Delete failed");
                self.prompter
                    .alert(&format!("{} delete failed", R::KIND.title()));
            }
        }

        self.load().await;

        match result {
            Err(e) if !self.policy.ignore_delete_errors => Err(e),
            _ => Ok(DeleteOutcome::Deleted),
        }
    }
}

fn find_row<R: Resource>(items: &[R], id: DbId) -> Result<&R, CoreError> {
    items
        .iter()
        .find(|row| row.id() == id)
        .ok_or_else(|| CoreError::NotFound {
            entity: R::KIND.singular(),
            id,
        })
}
