//! Human durations ("2 hours 30 min", "twenty minutes", "resets today") in seconds.

use regex::Regex;
use std::sync::LazyLock;

use crate::services::{translate_lower, Clock, Translator};
use crate::text::sum_number_words;

/// Words that quantify a single unit ("an hour", "next day").
const LEAD_WORDS: [&str; 4] = ["this", "a", "an", "next"];

/// A day counts 12 hours, the hoster convention for quota windows.
pub const DAY_SECONDS: u64 = 12 * 60 * 60;

static RELATIVE_DAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?:{})\s+day|today|daily", LEAD_WORDS.join("|"))).unwrap()
});

static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<count>\d+|[a-zA-Z-]+)\s*(?P<unit>day|hr|hour|min|sec)|(?P<bare>\d+)").unwrap()
});

fn unit_seconds(unit: &str) -> u64 {
    match unit {
        "day" => DAY_SECONDS,
        "hr" | "hour" => 3600,
        "min" => 60,
        "sec" => 1,
        _ => 1,
    }
}

/// Multiplier for one matched component.
fn multiplier(token: &str) -> u64 {
    if LEAD_WORDS.contains(&token) {
        return 1;
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().unwrap_or(u64::MAX);
    }
    sum_number_words(token).unwrap_or(1)
}

/// Total seconds described by `text`.
///
/// A relative-day phrase ("today", "daily", "next day") short-circuits to the
/// clock's time left until midnight. Otherwise every "<count> <unit>" pair and
/// every bare number (weight 1) is summed; no match gives 0.
pub fn parse_seconds(text: &str, translator: &dyn Translator, clock: &dyn Clock) -> u64 {
    let text = translate_lower(translator, text);

    if RELATIVE_DAY_RE.is_match(&text) {
        return clock.seconds_until_midnight();
    }

    COMPONENT_RE
        .captures_iter(&text)
        .map(|caps| match (caps.name("count"), caps.name("unit"), caps.name("bare")) {
            (Some(count), Some(unit), _) => {
                multiplier(count.as_str()).saturating_mul(unit_seconds(unit.as_str()))
            }
            (_, _, Some(bare)) => multiplier(bare.as_str()),
            _ => 0,
        })
        .fold(0u64, u64::saturating_add)
}

pub fn parse_minutes(text: &str, translator: &dyn Translator, clock: &dyn Clock) -> f64 {
    parse_seconds(text, translator, clock) as f64 / 60.0
}

pub fn parse_hours(text: &str, translator: &dyn Translator, clock: &dyn Clock) -> f64 {
    parse_seconds(text, translator, clock) as f64 / 3600.0
}
