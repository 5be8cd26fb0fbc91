//! Checksum extraction from free text, and verification of local files.
//!
//! Hosters publish checksums in many shapes ("md5: abc...", "abc... (sha1)",
//! "CRC32=abc..."). `extract_hash` finds the digest token and the algorithm
//! named before or after it.

mod verify;

pub use verify::{verify_path, VerifyError};

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Algorithm names recognized next to a digest, after hyphens are removed.
const ALGORITHMS: &[&str] = &[
    "md5", "sha1", "sha224", "sha256", "sha384", "sha512", "blake2b", "blake2s",
];

static HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    let algos = ALGORITHMS
        .iter()
        .copied()
        .chain(["adler32", "crc(?:32)?"])
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(
        r"(?P<pre>{algos})?\s*[:=]?\s*(?P<digest>[\w^]{{8,}})\s*[:=(\[]?\s*(?P<post>{algos})?"
    ))
    .unwrap()
});

/// Digest and algorithm found in a text fragment.
///
/// `algorithm` is only ever set together with `digest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HashRecord {
    pub digest: Option<String>,
    pub algorithm: Option<String>,
}

impl HashRecord {
    pub fn is_empty(&self) -> bool {
        self.digest.is_none()
    }
}

/// Finds a checksum and its algorithm in `text`.
///
/// Hyphens are dropped and the text lower-cased first, so "SHA-256" reads as
/// `sha256`. A leading algorithm name wins over a trailing one; a bare `crc`
/// is reported as `crc32`.
pub fn extract_hash(text: &str) -> HashRecord {
    let text = text.replace('-', "").to_lowercase();
    let Some(caps) = HASH_RE.captures(&text) else {
        return HashRecord::default();
    };

    let digest = caps.name("digest").map(|m| m.as_str().to_string());
    let algorithm = caps
        .name("pre")
        .or_else(|| caps.name("post"))
        .map(|m| match m.as_str() {
            "crc" => "crc32".to_string(),
            other => other.to_string(),
        });

    HashRecord { digest, algorithm }
}
