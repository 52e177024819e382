//! Composition root wiring the dashboard components together.

use std::sync::Arc;

use crate::application::services::{
    LinkCollectionStore, LinkCreationFlow, RefreshOutcome, ResultPresentation, SessionGate,
    SessionState,
};
use crate::domain::entities::Session;
use crate::domain::repositories::{LinkApi, SessionStore};
use crate::error::AppError;

/// Result of activating the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Signed in; the collection has had its initial refresh.
    Ready {
        session: Session,
        refresh: RefreshOutcome,
    },
    /// No session. Nothing was fetched; navigate to the entry point.
    RedirectToEntry,
}

/// Shared handles to every dashboard component.
#[derive(Clone)]
pub struct AppState {
    pub session_gate: Arc<SessionGate>,
    pub links: Arc<LinkCollectionStore>,
    pub creation: Arc<LinkCreationFlow>,
    pub presentation: Arc<ResultPresentation>,
}

impl AppState {
    pub fn new(api: Arc<dyn LinkApi>, store: Arc<dyn SessionStore>) -> Self {
        let session_gate = Arc::new(SessionGate::new(store));
        let links = Arc::new(LinkCollectionStore::new(api.clone(), session_gate.clone()));
        let presentation = Arc::new(ResultPresentation::new());
        let creation = Arc::new(LinkCreationFlow::new(
            api,
            session_gate.clone(),
            links.clone(),
            presentation.clone(),
        ));

        Self {
            session_gate,
            links,
            creation,
            presentation,
        }
    }

    /// Runs the session gate and, when signed in, the initial refresh.
    pub async fn activate(&self) -> Activation {
        match self.session_gate.acquire().await {
            SessionState::Authenticated(session) => {
                self.links.reset().await;
                let refresh = self.links.refresh(&session).await;
                Activation::Ready { session, refresh }
            }
            SessionState::Unauthenticated => Activation::RedirectToEntry,
        }
    }

    /// Clears the session and every piece of session-scoped state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if the persisted session cannot be cleared.
    /// In-memory state is cleared regardless.
    pub async fn logout(&self) -> Result<(), AppError> {
        let cleared = self.session_gate.logout().await;
        self.links.reset().await;
        self.presentation.dismiss();
        self.creation.set_form(Default::default());
        cleared
    }
}
