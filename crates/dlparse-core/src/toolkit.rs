//! One entry point per parsing concern, with the collaborators bound once.
//!
//! A `Toolkit` holds no mutable state; share it across threads freely.

use std::fmt;
use std::sync::Arc;

use crate::config::{ParseConfig, DEFAULT_FALLBACK_PACKAGE};
use crate::hash::{self, HashRecord};
use crate::name::{self, LinkNameExtractor, NameMode, PurgeSanitizer};
use crate::package::{self, PackageGroups};
use crate::services::{Clock, GlossaryTranslator, NameExtractor, Sanitizer, SystemClock, Translator};
use crate::size::{self, units::UnitTable, Traffic};
use crate::{duration, text};

#[derive(Clone)]
pub struct Toolkit {
    clock: Arc<dyn Clock>,
    translator: Arc<dyn Translator>,
    extractor: Arc<dyn NameExtractor>,
    sanitizer: Arc<dyn Sanitizer>,
    units: UnitTable,
    fallback_package: String,
}

impl Default for Toolkit {
    fn default() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            translator: Arc::new(GlossaryTranslator::default()),
            extractor: Arc::new(LinkNameExtractor),
            sanitizer: Arc::new(PurgeSanitizer),
            units: UnitTable::default(),
            fallback_package: DEFAULT_FALLBACK_PACKAGE.to_string(),
        }
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit")
            .field("units", &self.units)
            .field("fallback_package", &self.fallback_package)
            .finish_non_exhaustive()
    }
}

impl Toolkit {
    /// Default collaborators with the unit base, fallback label and glossary from `cfg`.
    pub fn from_config(cfg: &ParseConfig) -> Self {
        Self {
            translator: Arc::new(GlossaryTranslator::from_pairs(
                cfg.glossary.iter().map(|(k, v)| (k, v.clone())),
            )),
            units: UnitTable::new(cfg.unit_base),
            fallback_package: cfg.fallback_package.clone(),
            ..Self::default()
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    pub fn with_name_extractor(mut self, extractor: impl NameExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Arc::new(sanitizer);
        self
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn boolean(&self, text: &str) -> Option<bool> {
        text::parse_bool(text)
    }

    pub fn entries(&self, text: &str, allow_whitespace: bool) -> Vec<String> {
        text::split_entries(text, allow_whitespace)
    }

    pub fn hash(&self, text: &str) -> HashRecord {
        hash::extract_hash(text)
    }

    pub fn name(&self, text: &str, mode: NameMode) -> String {
        name::normalize_name(text, mode, self.extractor.as_ref(), self.sanitizer.as_ref())
    }

    pub fn alias(&self, text: &str) -> String {
        name::alias(text, self.extractor.as_ref(), self.sanitizer.as_ref())
    }

    pub fn number(&self, text: &str) -> Option<u64> {
        text::parse_number_words(text, self.translator.as_ref())
    }

    pub fn byte_size(&self, text: &str, from_unit: Option<&str>) -> Option<i64> {
        size::parse_byte_size(text, from_unit, &self.units)
    }

    pub fn traffic(&self, text: &str, from_unit: Option<&str>) -> Option<Traffic> {
        size::parse_traffic(text, from_unit, &self.units)
    }

    pub fn seconds(&self, text: &str) -> u64 {
        duration::parse_seconds(text, self.translator.as_ref(), self.clock.as_ref())
    }

    pub fn minutes(&self, text: &str) -> f64 {
        duration::parse_minutes(text, self.translator.as_ref(), self.clock.as_ref())
    }

    pub fn hours(&self, text: &str) -> f64 {
        duration::parse_hours(text, self.translator.as_ref(), self.clock.as_ref())
    }

    pub fn packages<N, U>(&self, links: impl IntoIterator<Item = (N, U)>) -> PackageGroups
    where
        N: AsRef<str>,
        U: Into<String>,
    {
        package::group_packages(
            links,
            &self.fallback_package,
            self.extractor.as_ref(),
            self.sanitizer.as_ref(),
        )
    }
}
