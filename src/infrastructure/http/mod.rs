//! HTTP client for the remote shortening API.

mod link_api;

pub use link_api::{HttpLinkApi, MY_URLS_PATH, SHORTEN_PATH};
