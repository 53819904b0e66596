//! The request MAC: the canonical request string and its HMAC under the credential key.

use crate::digest;
use crate::error::*;

const HEADER_PREFIX: &str = "hawk.1.header";

/// Build the canonical request string:
///
/// ```text
/// hawk.1.header
/// <ts>
/// <nonce>
/// <method>
/// <path>
/// <host>
/// <port>
/// <payload hash>
/// <empty line>
/// ```
///
/// Every line, including the final empty one, ends in `\n`.  All values are copied verbatim.
pub fn canonical_request(
    ts: &str,
    nonce: &str,
    method: &str,
    path: &str,
    host: &str,
    port: u16,
    payload_hash: &str,
) -> Vec<u8> {
    let port = port.to_string();
    let lines: [&str; 9] = [
        HEADER_PREFIX,
        ts,
        nonce,
        method,
        path,
        host,
        port.as_str(),
        payload_hash,
        "",
    ];

    let mut buffer = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines.iter() {
        buffer.extend_from_slice(line.as_bytes());
        buffer.push(b'\n');
    }
    buffer
}

/// Compute the base64 MAC a client holding `key` would have sent for this request.
#[allow(clippy::too_many_arguments)]
pub fn request_mac(
    key: &[u8],
    ts: &str,
    nonce: &str,
    method: &str,
    path: &str,
    host: &str,
    port: u16,
    payload_hash: &str,
) -> Result<String> {
    let canonical = canonical_request(ts, nonce, method, path, host, port, payload_hash);
    log::trace!(
        "canonical request:\n{}",
        String::from_utf8_lossy(&canonical)
    );
    digest::mac(key, &canonical)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_canonical_request() {
        let canonical = canonical_request(
            "1353832234",
            "j4h3g2",
            "POST",
            "/v1/",
            "my-domain",
            8080,
            "Yi9LfIIFRtBEPt74PVmbTF/xVAwPn7ub15ePICfgnuY=",
        );
        assert_eq!(
            String::from_utf8(canonical).unwrap(),
            "hawk.1.header\n1353832234\nj4h3g2\nPOST\n/v1/\nmy-domain\n8080\n\
             Yi9LfIIFRtBEPt74PVmbTF/xVAwPn7ub15ePICfgnuY=\n\n"
        );
    }

    #[test]
    fn test_canonical_request_verbatim() {
        let canonical = canonical_request("007", "n o", "get", "/a?b=1&c", "h", 1, "");
        assert_eq!(
            canonical,
            b"hawk.1.header\n007\nn o\nget\n/a?b=1&c\nh\n1\n\n\n".to_vec()
        );
    }

    #[test]
    fn test_request_mac() {
        let key = b"werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn";
        let mac = request_mac(key, "1353832234", "j4h3g2", "GET", "/resource/1", "example.com", 8000, "")
            .unwrap();
        let expected = digest::mac(
            key,
            b"hawk.1.header\n1353832234\nj4h3g2\nGET\n/resource/1\nexample.com\n8000\n\n\n",
        )
        .unwrap();
        assert_eq!(mac, expected);
        assert_eq!(mac.len(), 44);
    }
}
