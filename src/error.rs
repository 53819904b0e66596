use crate::crypto::CryptoError;
use failure::Fail;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that are not authentication decisions: a collaborator could not answer, the crypto
/// backend failed, or the caller supplied an unusable URL.  These are never folded into a
/// [`Rejection`].
#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(String),

    #[fail(display = "Credential lookup failed: {}", _0)]
    CredentialLookup(#[fail(cause)] failure::Error),

    #[fail(display = "Nonce check failed: {}", _0)]
    NonceCheck(#[fail(cause)] failure::Error),

    #[fail(display = "{}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        Error::Crypto(e)
    }
}

/// A required attribute of the Hawk `Authorization` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Ts,
    Hash,
    Mac,
    Nonce,
    Id,
}

impl Field {
    /// Required attributes, in the order their absence is reported.
    pub const REQUIRED: [Field; 5] = [Field::Ts, Field::Hash, Field::Mac, Field::Nonce, Field::Id];

    /// The attribute name as it appears in the header.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Ts => "ts",
            Field::Hash => "hash",
            Field::Mac => "mac",
            Field::Nonce => "nonce",
            Field::Id => "id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reason a request was not authenticated.  Exactly one is reported per request: the first
/// failing check in verification order.
#[derive(Fail, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[fail(display = "Invalid header")]
    InvalidHeader,
    #[fail(display = "Missing {}", _0)]
    Missing(Field),
    #[fail(display = "Invalid ts")]
    InvalidTs,
    #[fail(display = "Unidentified id")]
    UnidentifiedId,
    #[fail(display = "Invalid hash")]
    InvalidHash,
    #[fail(display = "Stale ts")]
    StaleTs,
    #[fail(display = "Invalid mac")]
    InvalidMac,
    #[fail(display = "Invalid nonce")]
    InvalidNonce,
}
