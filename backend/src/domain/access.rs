//! Access guard for identity-scoped reads and writes.
//!
//! The guard knows nothing about the resource being protected, only identity
//! equality. It must run before any identity-scoped store call so
//! authorisation failures short-circuit the request.

use super::{Error, Identity};

/// Deny unless the verified caller matches the requested resource owner.
///
/// Comparison is exact string equality with no normalisation.
pub fn authorize(caller: &Identity, requested_owner: &Identity) -> Result<(), Error> {
    if caller == requested_owner {
        Ok(())
    } else {
        Err(Error::forbidden("forbidden access"))
    }
}
