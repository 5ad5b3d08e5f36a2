//! The delimited representation: identifiers as repeated `key=value` pairs
//! joined by `&`, exactly like a URL query string. This is the form the
//! client compresses and the form the echo server parses.

use url::form_urlencoded;

use crate::error::Error;

/// Query key under which every identifier is stored.
pub const DEFAULT_KEY: &str = "companySeq";

/// Serializes identifiers as `key=id1&key=id2...`.
///
/// An empty slice yields an empty string.
pub fn encode(key: &str, ids: &[u64]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for id in ids {
        serializer.append_pair(key, &id.to_string());
    }
    serializer.finish()
}

/// Returns every value stored under `key`, keeping duplicates and order.
///
/// A single leading `?` is ignored so that a raw `Url::query` or a
/// `location.search`-style string are both accepted.
pub fn values(query: &str, key: &str) -> Vec<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .collect()
}

/// Parses the values stored under `key` back into identifiers.
///
/// Every value must be a positive integer.
pub fn decode_ids(query: &str, key: &str) -> Result<Vec<u64>, Error> {
    values(query, key)
        .into_iter()
        .map(|value| match value.parse::<u64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(Error::InvalidIdentifier(value)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn encode_joins_pairs_with_ampersand() {
        assert_eq!(
            encode(DEFAULT_KEY, &[1, 2, 3]),
            "companySeq=1&companySeq=2&companySeq=3"
        );
    }

    #[test]
    fn encode_empty_is_empty_string() {
        assert_eq!(encode(DEFAULT_KEY, &[]), "");
    }

    #[test_case("companySeq=5&companySeq=5&companySeq=1", &["5", "5", "1"]; "duplicates and order kept")]
    #[test_case("?companySeq=9", &["9"]; "leading question mark")]
    #[test_case("other=1&companySeq=2&other=3", &["2"]; "other keys skipped")]
    #[test_case("", &[]; "empty")]
    #[test_case("companySeq", &[""]; "key without value")]
    fn values_for_key(query: &str, expected: &[&str]) {
        assert_eq!(values(query, DEFAULT_KEY), expected);
    }

    #[test]
    fn decode_ids_inverts_encode() {
        let ids = vec![999, 1, 1, 500];
        let encoded = encode(DEFAULT_KEY, &ids);
        assert_eq!(decode_ids(&encoded, DEFAULT_KEY).unwrap(), ids);
    }

    #[test_case("companySeq=abc"; "not a number")]
    #[test_case("companySeq=0"; "zero")]
    #[test_case("companySeq=-4"; "negative")]
    fn decode_ids_rejects_non_positive_values(query: &str) {
        let err = decode_ids(query, DEFAULT_KEY).unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier(_)));
    }
}
