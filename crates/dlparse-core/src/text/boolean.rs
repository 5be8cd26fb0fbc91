/// Coerces a config-style token into a boolean.
///
/// `1`/`yes`/`true`/`on` and `0`/`no`/`false`/`off` are recognized after
/// trimming, in any letter case. Anything else is `None`, which callers must
/// read as "unspecified" rather than `false`.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_tokens() {
        for t in ["1", "yes", "TRUE", " On ", "\tYes\n"] {
            assert_eq!(parse_bool(t), Some(true), "{t:?}");
        }
    }

    #[test]
    fn falsy_tokens() {
        for t in ["0", "no", "False", "  OFF"] {
            assert_eq!(parse_bool(t), Some(false), "{t:?}");
        }
    }

    #[test]
    fn unknown_tokens_are_none() {
        for t in ["", "2", "y", "enabled", "yes please"] {
            assert_eq!(parse_bool(t), None, "{t:?}");
        }
    }
}
