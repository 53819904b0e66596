//! SHA-256 and HMAC-SHA256, base64-encoded the way Hawk clients transmit them.

use crate::b64;
use crate::crypto::cryptographer;
use crate::error::*;
use base64::Engine;

/// Hash `data` with SHA-256 and return the digest base64-encoded (standard alphabet, padded).
pub fn digest(data: &[u8]) -> Result<String> {
    let mut hasher = cryptographer().new_hasher()?;
    hasher.update(data)?;
    Ok(b64::STANDARD_ENGINE.encode(hasher.finish()?))
}

/// Compute HMAC-SHA256 of `data` under `key` and return it base64-encoded.
pub fn mac(key: &[u8], data: &[u8]) -> Result<String> {
    let key = cryptographer().new_key(key)?;
    Ok(b64::STANDARD_ENGINE.encode(key.sign(data)?))
}

/// Fixed-time equality of two encoded digests.
pub(crate) fn constant_time_eq(a: &str, b: &str) -> bool {
    cryptographer().constant_time_compare(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_digest_empty() {
        assert_eq!(
            digest(b"").unwrap(),
            "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[test]
    fn test_mac_hawk_example() {
        let key = b"werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn";
        let data = b"hawk.1.header\n1353832234\nj4h3g2\nGET\n/resource/1?b=1&a=2\nexample.com\n8000\n\nsome-app-ext-data\n";
        assert_eq!(
            mac(key, data).unwrap(),
            "6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE="
        );
    }

    #[test]
    fn test_mac_depends_on_key() {
        let data = b"hawk.1.header\n";
        assert_ne!(mac(b"one", data).unwrap(), mac(b"two", data).unwrap());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("abc=", "abc="));
        assert!(!constant_time_eq("abc=", "abd="));
        assert!(!constant_time_eq("abc=", "abc"));
        assert!(!constant_time_eq("", "a"));
    }
}
