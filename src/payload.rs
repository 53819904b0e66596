use crate::b64;
use crate::crypto::{cryptographer, Hasher};
use crate::error::*;
use base64::Engine;

const PAYLOAD_PREFIX: &[u8] = b"hawk.1.payload\n";

/// Build the canonical payload string, `hawk.1.payload\n<content-type>\n<content>\n`.
///
/// The content type is used exactly as given (no trimming or case folding) and the content is
/// inserted as raw bytes.
pub fn canonical_payload(content_type: &str, content: &[u8]) -> Vec<u8> {
    let mut buffer =
        Vec::with_capacity(PAYLOAD_PREFIX.len() + content_type.len() + content.len() + 2);
    buffer.extend_from_slice(PAYLOAD_PREFIX);
    buffer.extend_from_slice(content_type.as_bytes());
    buffer.push(b'\n');
    buffer.extend_from_slice(content);
    buffer.push(b'\n');
    buffer
}

/// A utility for hashing payloads without buffering them.  Feed the entity body to this, then
/// compare the `finish` result with the header's `hash` attribute.  The result is the same as
/// [`digest`](crate::digest) over [`canonical_payload`].
pub struct PayloadHasher {
    hasher: Box<dyn Hasher>,
}

impl PayloadHasher {
    /// Create a new PayloadHasher for a body of the given content type.
    pub fn new(content_type: &str) -> Result<Self> {
        let mut hasher = cryptographer().new_hasher()?;
        hasher.update(PAYLOAD_PREFIX)?;
        hasher.update(content_type.as_bytes())?;
        hasher.update(b"\n")?;
        Ok(PayloadHasher { hasher })
    }

    /// Hash a single value and return it
    pub fn hash(content_type: &str, payload: &[u8]) -> Result<String> {
        let mut hasher = PayloadHasher::new(content_type)?;
        hasher.update(payload)?;
        hasher.finish()
    }

    /// Update the hash with new data.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        Ok(self.hasher.update(data)?)
    }

    /// Finish hashing and return the base64-encoded result
    pub fn finish(mut self) -> Result<String> {
        self.hasher.update(b"\n")?;
        Ok(b64::STANDARD_ENGINE.encode(self.hasher.finish()?))
    }
}
