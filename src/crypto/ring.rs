use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use failure::err_msg;
use ring::{digest, hmac};

impl From<ring::error::Unspecified> for CryptoError {
    // Ring's errors are entirely opaque
    fn from(_: ring::error::Unspecified) -> Self {
        CryptoError::Other(err_msg("Unspecified ring error"))
    }
}

pub struct RingCryptographer;

struct RingHmacKey(hmac::Key);

impl HmacKey for RingHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(hmac::sign(&self.0, data).as_ref().to_vec())
    }
}

// This is always `Some` until `finish` is called.
struct RingHasher(Option<digest::Context>);

impl Hasher for RingHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        match self.0.as_mut() {
            Some(ctx) => {
                ctx.update(data);
                Ok(())
            }
            None => Err(CryptoError::Other(err_msg("update called after `finish`"))),
        }
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        match self.0.take() {
            Some(ctx) => Ok(ctx.finish().as_ref().to_vec()),
            None => Err(CryptoError::Other(err_msg("`finish` called twice"))),
        }
    }
}

impl Cryptographer for RingCryptographer {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        Ok(Box::new(RingHmacKey(hmac::Key::new(hmac::HMAC_SHA256, key))))
    }

    fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError> {
        Ok(Box::new(RingHasher(Some(digest::Context::new(&digest::SHA256)))))
    }

    #[allow(deprecated)]
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        ring::constant_time::verify_slices_are_equal(a, b).is_ok()
    }
}
