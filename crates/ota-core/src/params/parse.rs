//! Path parsing: find the marker segment, decode everything after it.

use super::{Entry, ParameterList};
use crate::codec;
use crate::error::CodecError;

/// Parses the encoded segments that follow `marker` in `path`.
///
/// Returns `Ok(None)` when there is no path or the marker never appears as a
/// whole segment, and `Ok(Some(list))` otherwise (possibly empty). Once the
/// marker was seen every later segment is decoded, including repeats of the
/// marker itself. Trailing empty segments (`.../a/`) are ignored.
///
/// | path                          | result                      |
/// |-------------------------------|-----------------------------|
/// | `/app/SERVICE/enc(a=b)/enc(c)`| `[["a", "b"], ["c"]]`       |
/// | `/app/SERVICE/enc(a=b=c)`     | `[["a", "b=c"]]`            |
/// | `/app/SERVICE`                | `[]`                        |
/// | `/app/OTHER/enc(a=b)`         | `None`                      |
pub fn parse_parameter_path(
    path: Option<&str>,
    marker: &str,
) -> Result<Option<ParameterList>, CodecError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let mut segments: Vec<&str> = path.split('/').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }

    let mut rest = segments.into_iter().skip_while(|s| *s != marker);
    if rest.next().is_none() {
        tracing::debug!(path, marker, "marker segment not found");
        return Ok(None);
    }

    rest.map(|segment| codec::decode(segment).map(|decoded| parse_key_value(&decoded)))
        .collect::<Result<ParameterList, _>>()
        .map(Some)
}

/// Splits `key=value` at the first `=`; a segment without `=` is a bare value.
pub fn parse_key_value(decoded: &str) -> Entry {
    match decoded.split_once('=') {
        Some((k, v)) => Entry::Pair(k.to_string(), v.to_string()),
        None => Entry::Value(decoded.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    fn pair(k: &str, v: &str) -> Entry {
        Entry::Pair(k.to_string(), v.to_string())
    }

    fn value(v: &str) -> Entry {
        Entry::Value(v.to_string())
    }

    fn parse(path: &str) -> Option<Vec<Entry>> {
        parse_parameter_path(Some(path), "SERVICE")
            .unwrap()
            .map(|list| list.entries().to_vec())
    }

    #[test]
    fn key_value_split_at_first_equals() {
        assert_eq!(parse_key_value(""), value(""));
        assert_eq!(parse_key_value("xyz"), value("xyz"));
        assert_eq!(parse_key_value("abc=xyz"), pair("abc", "xyz"));
        assert_eq!(parse_key_value("=xyz"), pair("", "xyz"));
        assert_eq!(parse_key_value("abc="), pair("abc", ""));
        assert_eq!(parse_key_value("="), pair("", ""));
        assert_eq!(parse_key_value("abc=xyz=hij"), pair("abc", "xyz=hij"));
    }

    #[test]
    fn parses_segments_after_marker() {
        let path = format!("/a/SERVICE/{}/{}", encode("k=v"), encode("x"));
        assert_eq!(parse(&path), Some(vec![pair("k", "v"), value("x")]));

        let path = format!(
            "/blabla/SERVICE/{}/{}/{}",
            encode("abc"),
            encode("def=qwe"),
            encode("xyz")
        );
        assert_eq!(
            parse(&path),
            Some(vec![value("abc"), pair("def", "qwe"), value("xyz")])
        );
    }

    #[test]
    fn trailing_slash_adds_no_entry() {
        let path = format!("/blabla/SERVICE/{}/", encode("abc"));
        assert_eq!(parse(&path), Some(vec![value("abc")]));
    }

    #[test]
    fn marker_without_parameters_is_empty_not_missing() {
        assert_eq!(parse("/blabla/SERVICE"), Some(vec![]));
        assert_eq!(parse("/blabla/SERVICE/"), Some(vec![]));
    }

    #[test]
    fn missing_marker_or_path_is_none() {
        let path = format!("/blabla/noservice/{}/", encode("abc"));
        assert_eq!(parse(&path), None);
        assert_eq!(parse("/blabla/SERVICES/x"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse_parameter_path(None, "SERVICE"), Ok(None));
    }

    #[test]
    fn repeated_marker_is_decoded_as_parameter() {
        let path = format!("/SERVICE/{}/SERVICE", encode("a=b"));
        assert!(parse_parameter_path(Some(&path), "SERVICE").is_err());

        let path = format!("/SERVICE/{}/{}", encode("a=b"), encode("SERVICE"));
        assert_eq!(parse(&path), Some(vec![pair("a", "b"), value("SERVICE")]));
    }

    #[test]
    fn undecodable_segment_is_an_error() {
        assert!(parse_parameter_path(Some("/SERVICE/not-base64"), "SERVICE").is_err());
    }

    #[test]
    fn values_may_contain_slashes_and_equals() {
        let referer = "http://nexus:8081/abc/MyApp.htm?x=y";
        let path = format!("/ota/PLIST/{}", encode(&format!("Referer={referer}")));
        let list = parse_parameter_path(Some(&path), "PLIST").unwrap().unwrap();
        assert_eq!(list.get("Referer"), Some(referer));
    }
}
