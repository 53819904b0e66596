use super::Cryptographer;
use failure::Fail;
use once_cell::sync::OnceCell;

static CRYPTOGRAPHER: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

#[derive(Debug, Fail)]
#[fail(display = "Cryptographer already initialized")]
pub struct SetCryptographerError(());

/// Sets the global object that will be used for cryptographic operations.
///
/// This is a convenience wrapper over [`set_cryptographer`],
/// but takes a `Box<dyn Cryptographer>` instead.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Sets the global object that will be used for cryptographic operations.
///
/// This function may only be called once in the lifetime of a program, and only has an effect
/// when neither the `use_ring` nor the `use_openssl` feature is enabled (otherwise that backend
/// is installed on first use).
///
/// Verifying a request before a cryptographer is available will panic.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    CRYPTOGRAPHER.set(c).map_err(|_| SetCryptographerError(()))
}

pub(crate) fn cryptographer() -> &'static dyn Cryptographer {
    autoinit_crypto();
    CRYPTOGRAPHER
        .get()
        .copied()
        .expect("`hawk_server` cryptographer not initialized!")
}

#[cfg(feature = "use_ring")]
#[inline]
fn autoinit_crypto() {
    let _ = set_cryptographer(&super::ring::RingCryptographer);
}

#[cfg(feature = "use_openssl")]
#[inline]
fn autoinit_crypto() {
    let _ = set_cryptographer(&super::openssl::OpensslCryptographer);
}

#[cfg(not(any(feature = "use_openssl", feature = "use_ring")))]
#[inline]
fn autoinit_crypto() {}

#[cfg(all(test, any(feature = "use_openssl", feature = "use_ring")))]
mod test {
    use super::*;
    use crate::crypto::{CryptoError, Hasher, HmacKey};

    struct Unsupported;

    impl Cryptographer for Unsupported {
        fn new_key(&self, _key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
            Err(CryptoError::Unsupported("hmac"))
        }

        fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError> {
            Err(CryptoError::Unsupported("sha256"))
        }

        fn constant_time_compare(&self, _a: &[u8], _b: &[u8]) -> bool {
            false
        }
    }

    #[test]
    fn feature_backend_cannot_be_replaced() {
        let _ = cryptographer();
        assert!(set_boxed_cryptographer(Box::new(Unsupported)).is_err());
        assert!(cryptographer().new_hasher().is_ok());
    }
}
