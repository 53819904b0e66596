use crate::error::{Field, Rejection};
use std::collections::BTreeMap;
use std::str::FromStr;

const SCHEME: &str = "Hawk ";
const SEPARATOR: &str = ", ";

/// A validated Hawk `Authorization` header value, including the `Hawk ` prefix.
///
/// The header is a sequence of `key="value"` attributes.  Keys are lowercase ASCII letters;
/// values are anything but `"`, with no escaping.  Attributes may be separated by `, `.
/// Parsing checks, in order:
///
///  * the overall shape (otherwise [`Rejection::InvalidHeader`]),
///  * presence of `ts`, `hash`, `mac`, `nonce` and `id`, reporting the first one missing,
///  * that `ts` is a string of ASCII digits (otherwise [`Rejection::InvalidTs`]).
///
/// An attribute with an empty value is accepted syntactically but not recorded, and when an
/// attribute repeats the last non-empty occurrence wins.
///
/// All values are kept verbatim, as they take part in the request MAC byte for byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub id: String,
    pub ts: String,
    pub nonce: String,
    pub hash: String,
    pub mac: String,
    others: BTreeMap<String, String>,
}

impl Header {
    /// Get any attribute by name, required or not (`ext`, `app`, `dlg`, ..).
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "id" => Some(&self.id),
            "ts" => Some(&self.ts),
            "nonce" => Some(&self.nonce),
            "hash" => Some(&self.hash),
            "mac" => Some(&self.mac),
            _ => self.others.get(name).map(String::as_str),
        }
    }

    /// The `ts` attribute in seconds since the epoch, or `None` if it does not fit in a `u64`.
    pub fn timestamp(&self) -> Option<u64> {
        self.ts.parse().ok()
    }
}

/// Split the attributes following the scheme into (key, value) pairs, failing on any deviation
/// from the `key="value"` grammar.
fn attributes(mut rest: &str) -> Result<Vec<(&str, &str)>, Rejection> {
    let mut attrs = vec![];
    if rest.is_empty() {
        return Ok(attrs);
    }

    loop {
        let key_len = rest.bytes().take_while(u8::is_ascii_lowercase).count();
        if key_len == 0 {
            return Err(Rejection::InvalidHeader);
        }
        let (key, after_key) = rest.split_at(key_len);
        let quoted = after_key
            .strip_prefix("=\"")
            .ok_or(Rejection::InvalidHeader)?;
        let end = quoted.find('"').ok_or(Rejection::InvalidHeader)?;
        attrs.push((key, &quoted[..end]));

        rest = &quoted[end + 1..];
        if rest.is_empty() {
            return Ok(attrs);
        }
        // a separator must be followed by another attribute
        if let Some(next) = rest.strip_prefix(SEPARATOR) {
            rest = next;
        }
    }
}

impl FromStr for Header {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Header, Rejection> {
        let rest = s.strip_prefix(SCHEME).ok_or(Rejection::InvalidHeader)?;

        let mut fields: BTreeMap<String, String> = BTreeMap::new();
        for (key, value) in attributes(rest)? {
            if !value.is_empty() {
                fields.insert(key.to_string(), value.to_string());
            }
        }

        if let Some(missing) = Field::REQUIRED
            .iter()
            .find(|f| !fields.contains_key(f.as_str()))
        {
            return Err(Rejection::Missing(*missing));
        }

        let mut take = |field: Field| fields.remove(field.as_str()).unwrap_or_default();
        let (id, ts, nonce) = (take(Field::Id), take(Field::Ts), take(Field::Nonce));
        let (hash, mac) = (take(Field::Hash), take(Field::Mac));
        let header = Header {
            id,
            ts,
            nonce,
            hash,
            mac,
            others: fields,
        };

        if !header.ts.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Rejection::InvalidTs);
        }

        Ok(header)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const FULL: &str = "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
                        hash=\"Yi9LfIIFRtBEPt74PVmbTF/xVAwPn7ub15ePICfgnuY=\", \
                        ext=\"some-app-ext-data\", \
                        mac=\"6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE=\"";

    fn parse(s: &str) -> Result<Header, Rejection> {
        Header::from_str(s)
    }

    #[test]
    fn from_str() {
        let h = parse(FULL).unwrap();
        assert_eq!(h.id, "dh37fgj492je");
        assert_eq!(h.ts, "1353832234");
        assert_eq!(h.timestamp(), Some(1353832234));
        assert_eq!(h.nonce, "j4h3g2");
        assert_eq!(h.hash, "Yi9LfIIFRtBEPt74PVmbTF/xVAwPn7ub15ePICfgnuY=");
        assert_eq!(h.mac, "6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE=");
        assert_eq!(h.get("ext"), Some("some-app-ext-data"));
        assert_eq!(h.get("mac"), Some(h.mac.as_str()));
        assert_eq!(h.get("app"), None);
    }

    #[test]
    fn from_str_unseparated() {
        let h = parse("Hawk id=\"a\"ts=\"1\"nonce=\"n\"hash=\"h\"mac=\"m\"").unwrap();
        assert_eq!(h.id, "a");
        assert_eq!(h.mac, "m");
    }

    #[test]
    fn from_str_last_wins() {
        let h = parse("Hawk id=\"a\", ts=\"1\", nonce=\"n\", hash=\"h\", mac=\"m\", id=\"b\"")
            .unwrap();
        assert_eq!(h.id, "b");
    }

    #[test]
    fn from_str_empty_does_not_override() {
        let h = parse("Hawk id=\"a\", ts=\"1\", nonce=\"n\", hash=\"h\", mac=\"m\", id=\"\"")
            .unwrap();
        assert_eq!(h.id, "a");
    }

    #[test]
    fn from_str_value_with_separators() {
        let h = parse("Hawk id=\"a, b=c\", ts=\"1\", nonce=\"=\", hash=\"h\", mac=\"m==\"")
            .unwrap();
        assert_eq!(h.id, "a, b=c");
        assert_eq!(h.nonce, "=");
        assert_eq!(h.mac, "m==");
    }

    #[test]
    fn invalid_shapes() {
        for s in &[
            "",
            "Hawk",
            "hawk id=\"a\"",
            "Basic dXNlcjpwYXNz",
            "Hawk d",
            "Hawk  id=\"a\"",
            "Hawk , id=\"a\"",
            "Hawk id=\"a\", ",
            "Hawk id=\"a\",",
            "Hawk id=\"a\",ts=\"1\"",
            "Hawk id=\"a\" , ts=\"1\"",
            "Hawk id = \"a\"",
            "Hawk id=a",
            "Hawk id=\"a",
            "Hawk Id=\"a\"",
            "Hawk i-d=\"a\"",
            "Hawk id2=\"a\"",
            "Hawk id=\"a\"\"",
        ] {
            assert_eq!(parse(s), Err(Rejection::InvalidHeader), "{:?}", s);
        }
    }

    #[test]
    fn missing_reports_first_in_order() {
        assert_eq!(parse("Hawk "), Err(Rejection::Missing(Field::Ts)));
        assert_eq!(
            parse("Hawk id=\"a\", nonce=\"n\""),
            Err(Rejection::Missing(Field::Ts))
        );
        assert_eq!(
            parse("Hawk ts=\"1\", id=\"a\", nonce=\"n\""),
            Err(Rejection::Missing(Field::Hash))
        );
        assert_eq!(
            parse("Hawk ts=\"1\", hash=\"h\", id=\"a\", nonce=\"n\""),
            Err(Rejection::Missing(Field::Mac))
        );
        assert_eq!(
            parse("Hawk ts=\"1\", hash=\"h\", mac=\"m\", id=\"a\""),
            Err(Rejection::Missing(Field::Nonce))
        );
        assert_eq!(
            parse("Hawk ts=\"1\", hash=\"h\", mac=\"m\", nonce=\"n\""),
            Err(Rejection::Missing(Field::Id))
        );
    }

    #[test]
    fn missing_when_empty() {
        assert_eq!(
            parse("Hawk id=\"a\", ts=\"1\", nonce=\"\", hash=\"h\", mac=\"m\""),
            Err(Rejection::Missing(Field::Nonce))
        );
    }

    #[test]
    fn missing_before_invalid_ts() {
        assert_eq!(
            parse("Hawk id=\"a\", ts=\"soon\", hash=\"h\", mac=\"m\""),
            Err(Rejection::Missing(Field::Nonce))
        );
    }

    #[test]
    fn invalid_ts() {
        for ts in &["non-numeric", "-1", "+1", "1.5", " 1", "1e3", "١٢"] {
            let s = format!(
                "Hawk id=\"a\", ts=\"{}\", nonce=\"n\", hash=\"h\", mac=\"m\"",
                ts
            );
            assert_eq!(parse(&s), Err(Rejection::InvalidTs), "{:?}", ts);
        }
    }

    #[test]
    fn huge_ts_is_syntactically_valid() {
        let h = parse(
            "Hawk id=\"a\", ts=\"99999999999999999999999\", nonce=\"n\", hash=\"h\", mac=\"m\"",
        )
        .unwrap();
        assert_eq!(h.ts, "99999999999999999999999");
        assert_eq!(h.timestamp(), None);
    }

    #[test]
    fn leading_zeros_kept() {
        let h = parse("Hawk id=\"a\", ts=\"0042\", nonce=\"n\", hash=\"h\", mac=\"m\"").unwrap();
        assert_eq!(h.ts, "0042");
        assert_eq!(h.timestamp(), Some(42));
    }
}
