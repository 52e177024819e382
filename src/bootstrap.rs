//! Runtime setup: builds the dashboard from configuration.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::infrastructure::http::HttpLinkApi;
use crate::infrastructure::storage::FileSessionStore;
use crate::state::AppState;

/// Wires the HTTP client and the file-backed session store into an [`AppState`].
///
/// # Errors
///
/// Returns an error if the API base address is invalid or the HTTP client
/// cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let api = HttpLinkApi::new(config.api_url()?, config.request_timeout())
        .context("Failed to build HTTP client")?;
    tracing::debug!(base_url = %api.base_url(), "HTTP client ready");

    let store = FileSessionStore::new(&config.session_file);
    tracing::debug!(path = %store.path().display(), "Session store ready");

    Ok(AppState::new(Arc::new(api), Arc::new(store)))
}
