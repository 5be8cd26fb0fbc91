//! Checksum verification of a downloaded file against an extracted record.
//!
//! Digests are computed on demand, reading the file in chunks.

use adler::Adler32;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

use super::HashRecord;

const BUF_SIZE: usize = 64 * 1024;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("checksum record has no digest")]
    MissingDigest,
    #[error("cannot compute {0} digests")]
    Unsupported(String),
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Compares the digest of the file at `path` with `record`.
///
/// Returns `Ok(true)` on a match. Without an algorithm in the record, it is
/// inferred from the digest length; 8-digit digests are ambiguous (crc32 or
/// adler32) and need an explicit algorithm.
pub fn verify_path(path: &Path, record: &HashRecord) -> Result<bool, VerifyError> {
    let expected = record.digest.as_deref().ok_or(VerifyError::MissingDigest)?;
    let algorithm = match record.algorithm.as_deref() {
        Some(a) => a.to_string(),
        None => infer_algorithm(expected)
            .ok_or_else(|| VerifyError::Unsupported(format!("{}-char digest", expected.len())))?
            .to_string(),
    };

    let actual = match algorithm.as_str() {
        "md5" => digest_path::<Md5>(path)?,
        "sha1" => digest_path::<Sha1>(path)?,
        "crc32" => {
            let mut hasher = crc32fast::Hasher::new();
            read_chunks(path, |chunk| hasher.update(chunk))?;
            format!("{:08x}", hasher.finalize())
        }
        "adler32" => {
            let mut hasher = Adler32::new();
            read_chunks(path, |chunk| hasher.write_slice(chunk))?;
            format!("{:08x}", hasher.checksum())
        }
        "sha224" => digest_path::<Sha224>(path)?,
        "sha256" => digest_path::<Sha256>(path)?,
        "sha384" => digest_path::<Sha384>(path)?,
        "sha512" => digest_path::<Sha512>(path)?,
        other => return Err(VerifyError::Unsupported(other.to_string())),
    };

    let matched = actual.eq_ignore_ascii_case(expected);
    tracing::debug!(path = %path.display(), %algorithm, matched, "checksum verified");
    Ok(matched)
}

fn infer_algorithm(digest: &str) -> Option<&'static str> {
    if !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digest.len() {
        32 => Some("md5"),
        40 => Some("sha1"),
        56 => Some("sha224"),
        64 => Some("sha256"),
        96 => Some("sha384"),
        128 => Some("sha512"),
        _ => None,
    }
}

/// Lower-case hex digest of a file.
fn digest_path<D: Digest>(path: &Path) -> Result<String, VerifyError> {
    let mut hasher = D::new();
    read_chunks(path, |chunk| hasher.update(chunk))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Feeds the file at `path` to `consume` in fixed-size chunks.
fn read_chunks(path: &Path, mut consume: impl FnMut(&[u8])) -> Result<(), VerifyError> {
    let io_err = |source| VerifyError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut f = File::open(path).map_err(io_err)?;
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).map_err(io_err)?;
        if n == 0 {
            return Ok(());
        }
        consume(&buf[..n]);
    }
}
