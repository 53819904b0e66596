//! Pluggable cryptographic primitives.
//!
//! Verification needs exactly three operations: a SHA-256 digest, an HMAC-SHA256 and a
//! constant-time byte comparison.  They are provided by a [`Cryptographer`], selected at build
//! time with the `use_ring` (default) or `use_openssl` feature, or installed at runtime with
//! [`set_cryptographer`] when neither feature is enabled.

use failure::Fail;

mod holder;
pub(crate) use holder::cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[cfg(feature = "use_openssl")]
mod openssl;

#[cfg(all(feature = "use_ring", feature = "use_openssl"))]
compile_error!("only one of the `use_ring` and `use_openssl` features may be enabled");

#[derive(Debug, Fail)]
pub enum CryptoError {
    /// The backend does not provide an operation verification needs.
    #[fail(display = "{} is unsupported by this Cryptographer", _0)]
    Unsupported(&'static str),

    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] failure::Error),
}

/// A keyed HMAC-SHA256 instance.
pub trait HmacKey: Send + Sync + 'static {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// An incremental SHA-256 context.  `finish` is called at most once.
pub trait Hasher: Send + 'static {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;
    fn finish(&mut self) -> Result<Vec<u8>, CryptoError>;
}

pub trait Cryptographer: Send + Sync + 'static {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError>;
    fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError>;
    /// Compare `a` and `b` in time that depends only on their lengths.
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}
