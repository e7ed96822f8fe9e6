use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::{ScanError, ScanResult};

/// Describes a cascade of matchers: the order of `matchers` is the order in
/// which alternatives are tried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Reject malformed or empty patterns up front instead of degrading the
    /// matcher to one that never hits.
    #[serde(default)]
    pub strict_patterns: bool,

    #[serde(default)]
    pub matchers: Vec<MatcherConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub kind: MatcherKind,
    pub pattern: String,
    pub token_type: String,
}

impl MatcherConfig {
    pub fn new(kind: MatcherKind, pattern: impl Into<String>, token_type: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
            token_type: token_type.into(),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatcherKind {
    Chars,
    Keyword,
    Comment,
    Quoted,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
            strict_patterns: false,
            matchers: Vec::new(),
        }
    }
}

impl NetworkConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> ScanResult<Self> {
        from_file(path)
    }

    /// Appends a matcher, builder style.
    pub fn with_matcher(
        mut self,
        kind: MatcherKind,
        pattern: impl Into<String>,
        token_type: impl Into<String>,
    ) -> Self {
        self.matchers.push(MatcherConfig::new(kind, pattern, token_type));
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict_patterns = strict;
        self
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> ScanResult<T> {
    let file = File::open(path.as_ref()).map_err(|e| {
        ScanError::Config(format!(
            "Failed to open config file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| ScanError::Config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> ScanResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| ScanError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_channel_capacity() -> usize {
    16
}
