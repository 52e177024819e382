//! Link creation: form state, wire request, and server result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::utils::url_normalizer::ensure_web_url;

/// Lifetime tier chosen at creation time. The server maps it to an expiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidityPeriod {
    #[serde(rename = "1day")]
    OneDay,
    #[default]
    #[serde(rename = "7days")]
    SevenDays,
    #[serde(rename = "1month")]
    OneMonth,
}

impl ValidityPeriod {
    pub const ALL: [ValidityPeriod; 3] = [Self::OneDay, Self::SevenDays, Self::OneMonth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1day",
            Self::SevenDays => "7days",
            Self::OneMonth => "1month",
        }
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown validity period '{0}' (expected 1day, 7days or 1month)")]
pub struct UnknownValidityPeriod(String);

impl FromStr for ValidityPeriod {
    type Err = UnknownValidityPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValidityPeriod(s.to_string()))
    }
}

/// Pending creation form as edited by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    pub original_url: String,
    pub custom_name: String,
    pub validity_period: ValidityPeriod,
}

impl CreationForm {
    pub fn new(
        original_url: impl Into<String>,
        custom_name: impl Into<String>,
        validity_period: ValidityPeriod,
    ) -> Self {
        Self {
            original_url: original_url.into(),
            custom_name: custom_name.into(),
            validity_period,
        }
    }

    /// Builds the outgoing request.
    ///
    /// A blank custom name is dropped entirely; a padded one is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the original URL is missing, does not
    /// parse, or is not an http/https URL.
    pub fn to_request(&self) -> Result<CreationRequest, AppError> {
        let custom_name = Some(self.custom_name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        let request = CreationRequest {
            original_url: self.original_url.trim().to_string(),
            custom_name,
            validity_period: self.validity_period,
        };

        request.validate()?;
        ensure_web_url(&request.original_url)
            .map_err(|e| AppError::validation(e.to_string()))?;

        Ok(request)
    }
}

/// Body of `POST /api/url/shorten`.
///
/// `customName` is omitted from the JSON when absent; the API treats a missing
/// field differently from an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    #[validate(
        length(min = 1, message = "Original URL is required"),
        url(message = "Original URL must be a valid URL")
    )]
    pub original_url: String,
    pub validity_period: ValidityPeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

/// Successful response of `POST /api/url/shorten`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationResult {
    #[serde(default)]
    pub message: String,
    pub short_url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub custom_name: String,
    #[serde(default)]
    pub validity_period: String,
    #[serde(alias = "expiryTimestamp")]
    pub expiry_date: DateTime<Utc>,
}
