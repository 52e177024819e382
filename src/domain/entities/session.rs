//! Session capability handed out by the session gate.

use std::fmt;

/// An authenticated session: the bearer token plus a display label for the user.
///
/// Sessions are only minted by [`crate::application::services::SessionGate`],
/// which stamps each one with the gate generation current at acquisition time.
/// After a logout the generation moves on and older sessions stop being current.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    identity_label: String,
    generation: u64,
}

impl Session {
    pub(crate) fn new(
        token: impl Into<String>,
        identity_label: impl Into<String>,
        generation: u64,
    ) -> Self {
        Self {
            token: token.into(),
            identity_label: identity_label.into(),
            generation,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn identity_label(&self) -> &str {
        &self.identity_label
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &mask_token(&self.token))
            .field("identity_label", &self.identity_label)
            .field("generation", &self.generation)
            .finish()
    }
}

/// Credentials produced by the external sign-in flow, ready to be persisted.
#[derive(Clone)]
pub struct Credentials {
    pub token: String,
    pub identity_label: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &mask_token(&self.token))
            .field("identity_label", &self.identity_label)
            .finish()
    }
}

/// Masks a bearer token for logging, keeping only a short prefix.
///
/// - `eyJhbGciOiJIUzI1NiJ9.payload.sig` → `eyJh***`
/// - `abc` → `***`
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 4;

    if token.chars().count() <= VISIBLE * 2 {
        return "***".to_string();
    }

    let prefix: String = token.chars().take(VISIBLE).collect();
    format!("{prefix}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("eyJhbGciOiJIUzI1NiJ9.payload.sig"), "eyJh***");
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token(""), "***");
    }

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("super-secret-token-value", "alice", 0);
        let rendered = format!("{session:?}");

        assert!(!rendered.contains("super-secret-token-value"));
        assert!(rendered.contains("supe***"));
        assert!(rendered.contains("alice"));
    }
}
