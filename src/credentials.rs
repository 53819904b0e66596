use std::fmt;

/// Hawk credentials: an ID and the secret key shared with the client holding that ID.
///
/// Credentials are produced by a [`CredentialStore`](crate::CredentialStore) for each request
/// and handed back unchanged when the request is authenticated.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub id: String,
    pub key: Vec<u8>,
}

impl Credentials {
    pub fn new<S, B>(id: S, key: B) -> Credentials
    where
        S: Into<String>,
        B: Into<Vec<u8>>,
    {
        Credentials {
            id: id.into(),
            key: key.into(),
        }
    }
}

// the key stays out of logs
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .finish()
    }
}
