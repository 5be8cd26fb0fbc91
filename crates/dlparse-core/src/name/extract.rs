//! Display-name extraction from link URLs and Content-Disposition values.

use crate::services::{CollabError, NameExtractor};

/// Default extractor for names found on hoster pages.
///
/// Understands a Content-Disposition value (`attachment; filename=...`) and
/// hierarchical URLs with a host. Anything else is reported as an error so the
/// caller can fall back to the path basename.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkNameExtractor;

impl NameExtractor for LinkNameExtractor {
    fn extract_name(&self, raw: &str) -> Result<String, CollabError> {
        let raw = raw.trim();
        let name = if is_content_disposition(raw) {
            parse_content_disposition_filename(raw)
        } else {
            name_from_url(raw)
        };
        name.filter(|n| !n.trim().is_empty())
            .ok_or_else(|| CollabError::NoName(raw.to_string()))
    }
}

fn is_content_disposition(value: &str) -> bool {
    let Some((kind, _)) = value.split_once(';') else {
        return false;
    };
    let kind = kind.trim();
    kind.eq_ignore_ascii_case("attachment") || kind.eq_ignore_ascii_case("inline")
}

/// Last non-empty path segment, else first query value, else first host label.
fn name_from_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let host = parsed.host_str()?;

    if let Some(segment) = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
    {
        return Some(percent_decode(segment));
    }

    if let Some((_, value)) = parsed.query_pairs().next() {
        if !value.is_empty() {
            return Some(value.into_owned());
        }
    }

    host.split('.').next().map(str::to_string)
}

/// Extracts the filename from a raw Content-Disposition header value.
///
/// Supports:
/// - `filename="value"` (quoted; strips quotes and unescapes)
/// - `filename=value` (token)
/// - `filename*=UTF-8''percent-encoded` (RFC 5987; decoded)
/// If both `filename` and `filename*` exist, `filename*` takes precedence.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    let mut filename_from_token: Option<String> = None;

    for param in header_value.trim().split(';') {
        let Some((name, v)) = param.trim().split_once('=') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let v = v.trim();

        if name == "filename*" {
            let encoded = v.get(..7).filter(|p| p.eq_ignore_ascii_case("utf-8''"));
            if encoded.is_some() {
                let decoded = decode_quoted_filename(&percent_decode(&v[7..]));
                if !decoded.is_empty() {
                    return Some(decoded);
                }
            }
        }

        if name == "filename" {
            let unquoted = if v.starts_with('"') && v.ends_with('"') && v.len() >= 2 {
                decode_quoted_filename(&v[1..v.len() - 1])
            } else {
                v.to_string()
            };
            if !unquoted.is_empty() {
                filename_from_token = Some(unquoted);
            }
        }
    }

    filename_from_token
}

/// Decode backslash-escaped quotes in a quoted filename value.
fn decode_quoted_filename(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('\\', Some(&next)) if next == '"' || next == '\\' => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Lossy percent-decode; malformed escapes are kept literally.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| bytes.get(i + 1..i + 3))
            .flatten()
            .and_then(|pair| Some(hex_digit(pair[0])? << 4 | hex_digit(pair[1])?));
        match escaped {
            Some(b) => {
                out.push(b);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Option<String> {
        LinkNameExtractor.extract_name(raw).ok()
    }

    #[test]
    fn url_last_segment() {
        assert_eq!(
            extract("https://example.com/a/b/file.rar").as_deref(),
            Some("file.rar")
        );
        assert_eq!(
            extract("https://example.com/dir/My%20Movie.cd1.rar?token=abc").as_deref(),
            Some("My Movie.cd1.rar")
        );
        assert_eq!(
            extract("https://example.com/folder/").as_deref(),
            Some("folder")
        );
    }

    #[test]
    fn url_query_then_host() {
        assert_eq!(
            extract("https://example.com/?file=report.pdf").as_deref(),
            Some("report.pdf")
        );
        assert_eq!(extract("https://files.example.com").as_deref(), Some("files"));
    }

    #[test]
    fn non_urls_fail() {
        assert!(LinkNameExtractor.extract_name("Movie.cd1.rar").is_err());
        assert!(LinkNameExtractor.extract_name("/srv/data/file.bin").is_err());
        assert!(LinkNameExtractor.extract_name("mailto:someone").is_err());
        assert!(LinkNameExtractor.extract_name("").is_err());
    }

    #[test]
    fn content_disposition_values() {
        assert_eq!(
            extract("attachment; filename=\"report.pdf\"").as_deref(),
            Some("report.pdf")
        );
        assert_eq!(
            extract("inline; filename=simple.bin").as_deref(),
            Some("simple.bin")
        );
        assert_eq!(extract("attachment; size=3"), None);
    }

    #[test]
    fn parse_filename_star_utf8() {
        let r = parse_content_disposition_filename("attachment; filename*=UTF-8''caf%C3%A9.txt");
        assert_eq!(r.as_deref(), Some("café.txt"));
    }

    #[test]
    fn parse_filename_star_precedence() {
        let r = parse_content_disposition_filename(
            "attachment; filename=\"fallback.bin\"; filename*=UTF-8''real%20name.dat",
        );
        assert_eq!(r.as_deref(), Some("real name.dat"));
    }

    #[test]
    fn escaped_quotes() {
        let r = parse_content_disposition_filename(r#"attachment; filename="a\"b.txt""#);
        assert_eq!(r.as_deref(), Some("a\"b.txt"));
    }

    #[test]
    fn malformed_percent_kept() {
        assert_eq!(percent_decode("100%zz%4"), "100%zz%4");
        assert_eq!(percent_decode("a%2Fb"), "a/b");
    }
}
