//! Cross-platform file-name sanitization.

use crate::services::Sanitizer;

const NAME_MAX: usize = 255;

/// Characters rejected by at least one common file system, plus `;`.
const UNSAFE_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|', ';'];

/// Device names Windows refuses as file names, whatever the extension.
const RESERVED_NAMES: &[&str] = &[
    "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7", "com8",
    "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Default [`Sanitizer`]: see [`purge_name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PurgeSanitizer;

impl Sanitizer for PurgeSanitizer {
    fn sanitize_name(&self, text: &str) -> String {
        purge_name(text)
    }
}

/// Sanitizes a candidate file name for use on any common file system.
///
/// - Replaces NUL, control characters, whitespace and `/ \ : * ? " < > | ;` with `_`
/// - Collapses consecutive underscores
/// - Trims leading/trailing spaces, dots and underscores
/// - Limits length to 255 bytes (NAME_MAX)
/// - Prefixes reserved device names (`con`, `nul`, ...) with `_`
///
/// Applying it twice gives the same result as applying it once.
pub fn purge_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let unsafe_char = c.is_control() || c.is_whitespace() || UNSAFE_CHARS.contains(&c);
        if unsafe_char || c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let name = truncate(trim_edges(&out), NAME_MAX);

    let stem = name.split('.').next().unwrap_or_default();
    if RESERVED_NAMES.contains(&stem.to_ascii_lowercase().as_str()) {
        format!("_{}", truncate(name, NAME_MAX - 1))
    } else {
        name.to_string()
    }
}

fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '.' || c == '_')
}

/// Cuts `s` to at most `max` bytes on a char boundary, then re-trims the edges.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    trim_edges(&s[..take])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_slash_and_backslash() {
        assert_eq!(purge_name("a/b\\c.txt"), "a_b_c.txt");
    }

    #[test]
    fn replaces_windows_unsafe_chars() {
        assert_eq!(purge_name("what?: \"yes\" <no>|*.txt"), "what_yes_no_.txt");
    }

    #[test]
    fn trims_dots_and_spaces() {
        assert_eq!(purge_name("  ..  file.txt  ..  "), "file.txt");
    }

    #[test]
    fn collapses_underscores() {
        assert_eq!(purge_name("file___name.txt"), "file_name.txt");
        assert_eq!(purge_name("My Movie - Part 1"), "My_Movie_-_Part_1");
    }

    #[test]
    fn control_chars() {
        assert_eq!(purge_name("file\x00name\t.txt"), "file_name_.txt");
    }

    #[test]
    fn reserved_names_prefixed() {
        assert_eq!(purge_name("CON"), "_CON");
        assert_eq!(purge_name("nul.txt"), "_nul.txt");
        assert_eq!(purge_name("console.txt"), "console.txt");
    }

    #[test]
    fn long_names_truncated_on_char_boundary() {
        let long = "é".repeat(200);
        let out = purge_name(&long);
        assert!(out.len() <= NAME_MAX);
        assert!(out.chars().all(|c| c == 'é'));
    }

    #[test]
    fn idempotent() {
        let long_tail = format!("{}._x", "a".repeat(254));
        let reserved_long = format!("con.{}", "b".repeat(260));
        for raw in [
            "a/b\\c.txt",
            "  ..weird  name..  ",
            "con",
            "__x__",
            "a:b;c",
            long_tail.as_str(),
            reserved_long.as_str(),
            "",
        ] {
            let once = purge_name(raw);
            assert_eq!(purge_name(&once), once, "{raw:?}");
        }
    }
}
