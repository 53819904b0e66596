//! The `hawk_server` crate verifies [Hawk](https://github.com/hueniverse/hawk) request
//! authentication on the server side.  Given the `Authorization` header of a received request and
//! the request's method, host, port, path, content type and body, it decides whether the request
//! was made by a holder of a known key, recently, and only once.
//!
//! Credentials and nonces are owned by the caller and supplied through the [`CredentialStore`]
//! and [`NonceStore`] traits, which are implemented for async closures.  The crate generates no
//! headers and stores nothing between requests.
//!
//! # Examples
//!
//! ```
//! use hawk_server::{Credentials, Outcome, Rejection, RequestBuilder, Verifier};
//! use std::time::{Duration, UNIX_EPOCH};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let lookup = |id: String| async move {
//!         Ok::<_, failure::Error>(match id.as_str() {
//!             "dh37fgj492je" => Some(Credentials::new(
//!                 "dh37fgj492je",
//!                 "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
//!             )),
//!             _ => None,
//!         })
//!     };
//!     let seen = |_nonce: String, _id: String| async { Ok::<_, failure::Error>(false) };
//!
//!     let verifier = Verifier::builder(lookup, seen)
//!         .max_skew(Duration::from_secs(60))
//!         .build();
//!
//!     // the attributes of the request as the server received it
//!     let request = RequestBuilder::new("POST", "example.com", 8000, "/resource/1")
//!         .content_type("text/plain")
//!         .content(b"Thank you for flying Hawk")
//!         .request();
//!
//!     // a header whose MAC was computed with another key
//!     let header = "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
//!                   hash=\"Yi9LfIIFRtBEPt74PVmbTF/xVAwPn7ub15ePICfgnuY=\", \
//!                   mac=\"AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=\"";
//!
//!     let now = UNIX_EPOCH + Duration::from_secs(1353832234);
//!     let outcome = verifier.authenticate_at(now, header, &request).await.unwrap();
//!     assert_eq!(outcome, Outcome::Rejected(Rejection::InvalidMac));
//!     assert_eq!(outcome.rejection().unwrap().to_string(), "Invalid mac");
//! }
//! ```
//!
//! Verification checks, in order, and stops at the first failure:
//!
//!  1. header syntax: `Invalid header`, `Missing <field>`, `Invalid ts`
//!  2. the id is known to the credential store: `Unidentified id`
//!  3. the payload hash matches the body: `Invalid hash`
//!  4. the timestamp is within the allowed skew: `Stale ts`
//!  5. the MAC matches: `Invalid mac`
//!  6. the nonce has not been seen for this id: `Invalid nonce`
//!
//! Errors from the stores themselves are returned as [`Error`], never as a rejection.
//!
//! ## Features
//!
//! By default, the `use_ring` feature is enabled, which means that this crate will
//! use `ring` for all cryptographic operations.
//!
//! Alternatively, one can configure the crate with the `use_openssl`
//! feature to use the `openssl` crate.
//!
//! If no features are enabled, you must provide a custom implementation of the
//! [`crypto::Cryptographer`] trait to the `set_cryptographer` function, or
//! verification will panic.
//!
//! Attempting to configure both the `use_ring` and `use_openssl` features will
//! result in a build error.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod b64;

mod header;
pub use crate::header::Header;

mod credentials;
pub use crate::credentials::Credentials;

mod request;
pub use crate::request::{Request, RequestBuilder};

mod error;
pub use crate::error::*;

mod payload;
pub use crate::payload::{canonical_payload, PayloadHasher};

mod mac;
pub use crate::mac::{canonical_request, request_mac};

mod digest;
pub use crate::digest::{digest, mac};

mod store;
pub use crate::store::{CredentialStore, NonceStore};

mod verifier;
pub use crate::verifier::{authenticate, Outcome, Verifier, VerifierBuilder, DEFAULT_MAX_SKEW};

pub mod crypto;
