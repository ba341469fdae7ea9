//! Caller identity primitive.
//!
//! An [`Identity`] is the email-like string that names a user across tokens,
//! job ownership, and applications. Comparisons are exact: no case folding or
//! trimming is applied, mirroring the strict equality checks that gate every
//! identity-scoped endpoint.

use serde::{Deserialize, Serialize};

/// Validated email-like identity string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

/// Validation errors raised by [`Identity::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityValidationError {
    /// The identity string is empty or whitespace only.
    #[error("identity must not be empty")]
    Empty,
    /// The identity string is not email shaped.
    #[error("identity must be an email-like string: {value}")]
    NotEmailLike {
        /// The rejected input.
        value: String,
    },
}

impl Identity {
    /// Construct a validated identity.
    ///
    /// The value must be non-empty and email shaped (a single `@` with
    /// non-empty parts either side, no whitespace). The stored value is
    /// otherwise kept byte-for-byte as supplied.
    pub fn new(value: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(IdentityValidationError::Empty);
        }
        let mut parts = value.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let well_formed = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !value.chars().any(char::is_whitespace);
        if !well_formed {
            return Err(IdentityValidationError::NotEmailLike { value });
        }
        Ok(Self(value))
    }

    /// Borrow the identity as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Identity {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}
