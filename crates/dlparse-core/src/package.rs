//! Grouping of (name, url) pairs into packages.
//!
//! Multi-part releases (`Movie.cd1.rar`, `Movie.cd2.rar`, `Movie.part3.rar`)
//! collapse onto one package key; unrelated names stay apart.

use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::name::{normalize_name, NameMode};
use crate::services::{NameExtractor, Sanitizer};

/// Separator runs, optionally swallowing a following `cd<N>`/`part<N>` marker.
static PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9]+(?:(?:cd|part).*?\d+)?").unwrap());

/// Package name → URLs, in first-seen order of names and input order of URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGroups {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl PackageGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` to the package `name`, creating it at the end if new.
    pub fn push(&mut self, name: &str, url: String) {
        match self.index.get(name) {
            Some(&i) => self.groups[i].1.push(url),
            None => {
                self.index.insert(name.to_string(), self.groups.len());
                self.groups.push((name.to_string(), vec![url]));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.groups[i].1.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, urls)| (name.as_str(), urls.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, Vec<String>)> {
        self.groups
    }
}

impl Serialize for PackageGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, urls) in &self.groups {
            map.serialize_entry(name, urls)?;
        }
        map.end()
    }
}

/// Derives the package key for one link name; empty when nothing is left.
pub fn package_key(name: &str, extractor: &dyn NameExtractor, sanitizer: &dyn Sanitizer) -> String {
    let purged = normalize_name(name, NameMode::Purged, extractor, sanitizer);
    let stem = strip_extension(&purged).trim();
    PART_RE.replace_all(stem, "_").trim_matches('_').to_string()
}

/// Groups links by package key; empty keys go to `fallback`.
pub fn group_packages<N, U>(
    links: impl IntoIterator<Item = (N, U)>,
    fallback: &str,
    extractor: &dyn NameExtractor,
    sanitizer: &dyn Sanitizer,
) -> PackageGroups
where
    N: AsRef<str>,
    U: Into<String>,
{
    let mut packages = PackageGroups::new();
    let mut links_seen = 0usize;
    for (name, url) in links {
        let key = package_key(name.as_ref(), extractor, sanitizer);
        let key = if key.is_empty() { fallback } else { key.as_str() };
        packages.push(key, url.into());
        links_seen += 1;
    }
    tracing::debug!(links = links_seen, packages = packages.len(), "grouped links");
    packages
}

/// Drops the last `.ext`, unless the only dot leads the name (`.bashrc`).
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if name[..i].chars().any(|c| c != '.') => &name[..i],
        _ => name,
    }
}
