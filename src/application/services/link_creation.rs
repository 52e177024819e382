//! Link creation workflow.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::application::services::{
    LinkCollectionStore, RefreshOutcome, ResultPresentation, SessionGate,
};
use crate::domain::entities::{CreationForm, CreationResult, Session};
use crate::domain::repositories::LinkApi;
use crate::error::AppError;
use crate::utils::loading::LoadingFlag;

/// Owns the pending creation form and runs submissions.
///
/// A successful submission shows the result, resets the form and refreshes the
/// link collection, in that order, within the same task. The refresh is best
/// effort: its failure never turns a successful creation into an error.
pub struct LinkCreationFlow {
    api: Arc<dyn LinkApi>,
    gate: Arc<SessionGate>,
    collection: Arc<LinkCollectionStore>,
    presentation: Arc<ResultPresentation>,
    form: Mutex<CreationForm>,
    loading: LoadingFlag,
}

impl LinkCreationFlow {
    pub fn new(
        api: Arc<dyn LinkApi>,
        gate: Arc<SessionGate>,
        collection: Arc<LinkCollectionStore>,
        presentation: Arc<ResultPresentation>,
    ) -> Self {
        Self {
            api,
            gate,
            collection,
            presentation,
            form: Mutex::new(CreationForm::default()),
            loading: LoadingFlag::new(),
        }
    }

    pub fn form(&self) -> CreationForm {
        self.form_slot().clone()
    }

    pub fn set_form(&self, form: CreationForm) {
        *self.form_slot() = form;
    }

    pub fn edit_form(&self, edit: impl FnOnce(&mut CreationForm)) {
        edit(&mut *self.form_slot());
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Submits the current form.
    ///
    /// # Errors
    ///
    /// - [`AppError::Unauthenticated`] when `session` is `None` (no network call
    ///   is made) or was invalidated while the request was in flight
    /// - [`AppError::Validation`] when the form is rejected locally
    /// - [`AppError::Remote`] / [`AppError::Transport`] / [`AppError::Decode`]
    ///   when the API call fails
    ///
    /// On every error the form is left as it was so the user can retry.
    pub async fn submit(&self, session: Option<&Session>) -> Result<CreationResult, AppError> {
        let Some(session) = session else {
            tracing::debug!("Submission without a session, redirecting");
            return Err(AppError::Unauthenticated);
        };

        let _loading = self.loading.begin();

        let request = self.form().to_request()?;

        let result = self
            .api
            .shorten(session.token(), &request)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Link creation failed"))?;

        if !self.gate.is_current(session) {
            tracing::debug!("Discarding creation result from an invalidated session");
            return Err(AppError::Unauthenticated);
        }

        tracing::info!(
            short_url = %result.short_url,
            validity = %request.validity_period,
            "Link created"
        );

        self.presentation.show(result.clone());
        self.set_form(CreationForm::default());

        if self.collection.refresh(session).await == RefreshOutcome::Failed {
            tracing::warn!("Link created but the collection could not be refreshed");
        }

        Ok(result)
    }

    fn form_slot(&self) -> MutexGuard<'_, CreationForm> {
        self.form.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
