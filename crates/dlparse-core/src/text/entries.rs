use regex::Regex;
use std::sync::LazyLock;

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;,|]+").unwrap());
static DELIMITERS_OR_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;,|\s]+").unwrap());

/// Splits a `;`, `,` or `|` separated list, dropping empty entries.
///
/// Unless `allow_whitespace` is set, whitespace runs separate entries too.
pub fn split_entries(text: &str, allow_whitespace: bool) -> Vec<String> {
    let re = if allow_whitespace {
        &*DELIMITERS
    } else {
        &*DELIMITERS_OR_SPACE
    };
    re.split(text)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_delimiters() {
        assert_eq!(split_entries("a;b,,c| d", false), ["a", "b", "c", "d"]);
    }

    #[test]
    fn whitespace_kept_when_allowed() {
        assert_eq!(
            split_entries("big file;other file", true),
            ["big file", "other file"]
        );
        assert_eq!(split_entries("a;b,,c| d", true), ["a", "b", "c", " d"]);
    }

    #[test]
    fn only_delimiters() {
        assert!(split_entries(";;, |", false).is_empty());
        assert!(split_entries("", false).is_empty());
    }

    #[test]
    fn order_preserved() {
        assert_eq!(split_entries("z y x", false), ["z", "y", "x"]);
    }
}
