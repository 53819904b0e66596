use super::{CryptoError, Cryptographer, Hasher, HmacKey};
use openssl::error::ErrorStack;
use openssl::hash::{Hasher as OpensslHasherCtx, MessageDigest};
use openssl::pkey::{PKey, Private};
use openssl::sign::Signer;

impl From<ErrorStack> for CryptoError {
    fn from(e: ErrorStack) -> Self {
        CryptoError::Other(e.into())
    }
}

pub struct OpensslCryptographer;

struct OpensslHmacKey(PKey<Private>);

impl HmacKey for OpensslHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut signer = Signer::new(MessageDigest::sha256(), &self.0)?;
        signer.update(data)?;
        Ok(signer.sign_to_vec()?)
    }
}

struct OpensslHasher(OpensslHasherCtx);

impl Hasher for OpensslHasher {
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        Ok(self.0.update(data)?)
    }

    fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        Ok(self.0.finish()?.to_vec())
    }
}

impl Cryptographer for OpensslCryptographer {
    fn new_key(&self, key: &[u8]) -> Result<Box<dyn HmacKey>, CryptoError> {
        Ok(Box::new(OpensslHmacKey(PKey::hmac(key)?)))
    }

    fn new_hasher(&self) -> Result<Box<dyn Hasher>, CryptoError> {
        Ok(Box::new(OpensslHasher(OpensslHasherCtx::new(
            MessageDigest::sha256(),
        )?)))
    }

    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        // openssl::memcmp::eq panics on unequal lengths
        a.len() == b.len() && openssl::memcmp::eq(a, b)
    }
}
