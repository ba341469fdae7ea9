//! Identity token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the caller identity as `sub`. Verification
//! is a pure function of the token, the shared secret, and an injected clock:
//! the caller supplies `now` so expiry behaviour is deterministic in tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use super::{Error, Identity};

/// Fixed validity window applied when signing tokens.
pub const TOKEN_VALIDITY_DAYS: i64 = 30;

/// Wire-format JWT claims.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Decoded contents of a verified token. Transient: produced by the
/// verifier, consumed by the access guard, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    identity: Identity,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl IdentityClaims {
    /// The embedded caller identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Issued-at timestamp.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Expiry timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Token verification failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// The token is malformed, unsigned, or the signature does not validate.
    #[error("invalid token")]
    Invalid,
    /// The token's expiry timestamp is before the supplied clock.
    #[error("token expired")]
    Expired,
}

impl From<TokenError> for Error {
    fn from(error: TokenError) -> Self {
        Self::unauthorized(error.to_string())
    }
}

/// Signs and verifies identity tokens against a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Build a service from the shared secret bytes.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token for `identity` valid for [`TOKEN_VALIDITY_DAYS`] from
    /// `now`. Pure beyond reading the secret.
    pub fn sign(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, Error> {
        let claims = WireClaims {
            sub: identity.as_str().to_owned(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_VALIDITY_DAYS)).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|err| Error::internal(format!("failed to sign token: {err}")))
    }

    /// Verify a token against the secret and the supplied clock.
    ///
    /// Expiry is checked against `now` rather than the process clock so the
    /// validity window is testable; the library's own expiry check is
    /// disabled for that reason. The comparison is at whole-second
    /// granularity, matching the precision of the `exp` claim.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<WireClaims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let issued_at = timestamp(data.claims.iat)?;
        let expires_at = timestamp(data.claims.exp)?;
        if data.claims.exp < now.timestamp() {
            return Err(TokenError::Expired);
        }

        let identity = Identity::new(data.claims.sub).map_err(|_| TokenError::Invalid)?;
        Ok(IdentityClaims {
            identity,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or(TokenError::Invalid)
}
