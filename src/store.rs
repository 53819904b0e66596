//! The two collaborators verification depends on but does not own.
//!
//! Both are single-method capabilities.  They may be implemented directly, or supplied as
//! closures returning futures:
//!
//! ```
//! use hawk_server::{CredentialStore, Credentials, NonceStore};
//!
//! fn stores() -> (impl CredentialStore, impl NonceStore) {
//!     let lookup = |id: String| async move {
//!         Ok::<_, failure::Error>(match id.as_str() {
//!             "my-id" => Some(Credentials::new("my-id", "my-secret")),
//!             _ => None,
//!         })
//!     };
//!     let seen = |_nonce: String, _id: String| async { Ok::<_, failure::Error>(false) };
//!     (lookup, seen)
//! }
//! # stores();
//! ```

use crate::credentials::Credentials;
use async_trait::async_trait;
use std::future::Future;

/// Maps a Hawk id to its credentials.
///
/// `Ok(None)` means the id is unknown and the request is rejected.  An `Err` means the store
/// could not answer; it is returned to the caller as [`Error::CredentialLookup`](crate::Error).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn lookup_credentials(&self, id: &str) -> Result<Option<Credentials>, failure::Error>;
}

/// Answers whether a (nonce, id) pair has been presented before.
///
/// This is called once per request, after the MAC has been verified.  Recording the pair, and
/// making the check atomic with the recording, are the store's business.
#[async_trait]
pub trait NonceStore: Send + Sync {
    async fn seen_nonce(&self, nonce: &str, id: &str) -> Result<bool, failure::Error>;
}

#[async_trait]
impl<F, Fut> CredentialStore for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Option<Credentials>, failure::Error>> + Send + 'static,
{
    async fn lookup_credentials(&self, id: &str) -> Result<Option<Credentials>, failure::Error> {
        (self)(id.to_string()).await
    }
}

#[async_trait]
impl<F, Fut> NonceStore for F
where
    F: Fn(String, String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<bool, failure::Error>> + Send + 'static,
{
    async fn seen_nonce(&self, nonce: &str, id: &str) -> Result<bool, failure::Error> {
        (self)(nonce.to_string(), id.to_string()).await
    }
}
