//! The signed-in user's link collection.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::collection_shape::decode_collection;
use crate::application::services::SessionGate;
use crate::domain::entities::{LinkCollection, Session};
use crate::domain::repositories::LinkApi;
use crate::error::AppError;
use crate::utils::loading::LoadingFlag;

/// What a [`LinkCollectionStore::refresh`] call did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The collection was replaced with this many links.
    Loaded(usize),
    /// The fetch failed and the collection was emptied.
    Failed,
    /// The session was invalidated mid-flight; nothing was applied.
    Discarded,
}

/// Owns the user's links and the listing's loading flag.
///
/// Each refresh replaces the collection wholesale; when refreshes overlap, the
/// one that completes last wins. Failures never escape: they are logged and the
/// collection degrades to empty.
pub struct LinkCollectionStore {
    api: Arc<dyn LinkApi>,
    gate: Arc<SessionGate>,
    links: RwLock<LinkCollection>,
    loading: LoadingFlag,
}

impl LinkCollectionStore {
    pub fn new(api: Arc<dyn LinkApi>, gate: Arc<SessionGate>) -> Self {
        Self {
            api,
            gate,
            links: RwLock::new(LinkCollection::empty()),
            loading: LoadingFlag::new(),
        }
    }

    /// Fetches and normalizes the remote collection.
    ///
    /// The token is not checked locally; an invalid one surfaces as a failed
    /// fetch. Results obtained under a session that has since been logged out
    /// are discarded.
    pub async fn refresh(&self, session: &Session) -> RefreshOutcome {
        let _loading = self.loading.begin();

        let fetched = self
            .api
            .fetch_links(session.token())
            .await
            .map(decode_collection);

        // Checked under the write guard so a logout cannot slip in between.
        let mut links = self.links.write().await;
        if !self.gate.is_current(session) {
            tracing::debug!("Discarding link listing from an invalidated session");
            return RefreshOutcome::Discarded;
        }

        match fetched {
            Ok(collection) => {
                let count = collection.len();
                *links = collection;
                tracing::debug!(count, "Link collection refreshed");
                RefreshOutcome::Loaded(count)
            }
            Err(e) => {
                log_refresh_failure(&e);
                *links = LinkCollection::empty();
                RefreshOutcome::Failed
            }
        }
    }

    /// Snapshot of the current collection.
    pub async fn links(&self) -> LinkCollection {
        self.links.read().await.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Drops every link, e.g. after logout.
    pub async fn reset(&self) {
        *self.links.write().await = LinkCollection::empty();
    }
}

fn log_refresh_failure(error: &AppError) {
    match error {
        AppError::Remote { status, message } => {
            tracing::error!(status, %message, "Failed to fetch links")
        }
        other => tracing::error!(error = %other, "Failed to fetch links"),
    }
}
