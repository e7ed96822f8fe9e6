//! # Character-Set Matcher
//!
//! Consumes the longest run of bytes belonging to a configured set. The run
//! is greedy and never backtracks, so a hit is exactly the maximal prefix of
//! the remaining input matching `set+`.
//!
//! ## Set Specification
//!
//! * `[...]`: a regular-expression character class, compiled once. A class
//!   that fails to compile yields [`CharSet::Never`], a set that matches
//!   nothing, so the matcher misses on every token instead of failing the
//!   network. Use strict validation ([`Matcher::try_configure`]) to turn
//!   this into an error.
//! * anything else: a literal set of accepted characters, where the escape
//!   sequences `\t`, `\r` and `\n` stand for the control characters.

use regex::bytes::Regex;
use tracing::warn;

use super::{Matcher, Outcome, Scanner};
use crate::{
    config::MatcherKind,
    token::{Token, TokenType},
    ScanError, ScanResult,
};

/// A resolved set specification.
#[derive(Debug, Clone)]
pub enum CharSet {
    /// Accepted bytes, escapes already expanded.
    Literal(Vec<u8>),
    /// Class matched against a single byte.
    Class(Regex),
    /// Fallback for a malformed class.
    Never,
}

impl CharSet {
    /// Resolves a specification, degrading a malformed class to
    /// [`CharSet::Never`].
    pub fn parse(pattern: &str) -> Self {
        match Self::try_parse(pattern) {
            Ok(set) => set,
            Err(e) => {
                warn!("{}, matcher will never hit", e);
                CharSet::Never
            }
        }
    }

    pub fn try_parse(pattern: &str) -> ScanResult<Self> {
        if is_class(pattern) {
            return Regex::new(pattern)
                .map(CharSet::Class)
                .map_err(|e| ScanError::InvalidPattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                });
        }
        Ok(CharSet::Literal(expand_escapes(pattern).into_bytes()))
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        match self {
            CharSet::Literal(bytes) => bytes.contains(&b),
            CharSet::Class(class) => class.is_match(&[b]),
            CharSet::Never => false,
        }
    }
}

fn is_class(pattern: &str) -> bool {
    pattern.len() >= 2 && pattern.starts_with('[') && pattern.ends_with(']')
}

fn expand_escapes(pattern: &str) -> String {
    pattern
        .replace(r"\t", "\t")
        .replace(r"\r", "\r")
        .replace(r"\n", "\n")
}

#[derive(Debug, Clone)]
pub struct CharsMatcher {
    set: CharSet,
    token_type: TokenType,
}

impl CharsMatcher {
    pub fn set(&self) -> &CharSet {
        &self.set
    }
}

impl Matcher for CharsMatcher {
    const KIND: MatcherKind = MatcherKind::Chars;

    fn configure(pattern: &str, token_type: TokenType) -> Self {
        Self {
            set: CharSet::parse(pattern),
            token_type,
        }
    }

    fn try_configure(pattern: &str, token_type: TokenType) -> ScanResult<Self> {
        if pattern.is_empty() {
            return Err(ScanError::EmptyPattern { kind: Self::KIND });
        }
        Ok(Self {
            set: CharSet::try_parse(pattern)?,
            token_type,
        })
    }

    fn scan(&self, mut token: Token) -> Outcome {
        let len = token.file.run_len(token.pos, |b| self.set.contains(b));
        if len == 0 {
            return Outcome::Miss(token);
        }
        let value = token.file.text(token.pos, len);
        token.assign(len, value, self.token_type.clone());
        Outcome::Hit(token)
    }
}

/// Component scanning runs of characters belonging to a set.
pub type ScanChars = Scanner<CharsMatcher>;
