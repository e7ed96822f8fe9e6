//! # Keyword Matcher
//!
//! Recognizes one case-insensitive keyword or operator. The configured text is
//! upper-cased once and its byte length fixes how much input is compared.
//!
//! ## Boundary Rule
//!
//! A textual match is only a hit if the byte that follows does not extend it:
//!
//! * word-like keywords (only `[A-Za-z0-9_]`) must not be followed by a word
//!   character, so `FOR` does not match the start of `FOREACH`;
//! * operator keywords must not be followed by a symbol (neither a word
//!   character nor whitespace), so `=` does not match the start of `==`.
//!
//! Only the true end of the buffer satisfies the rule unconditionally. A zero
//! byte inside the buffer is an ordinary symbol byte.

use super::{Matcher, Outcome, Scanner};
use crate::{
    config::MatcherKind,
    token::{Token, TokenType},
};

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keyword: String,
    word_like: bool,
    token_type: TokenType,
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[inline]
fn is_symbol_byte(b: u8) -> bool {
    !is_word_byte(b) && !b.is_ascii_whitespace()
}

impl KeywordMatcher {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn is_word_like(&self) -> bool {
        self.word_like
    }

    fn accepts_following(&self, next: Option<u8>) -> bool {
        let Some(next) = next else {
            return true;
        };
        if self.word_like {
            !is_word_byte(next)
        } else {
            !is_symbol_byte(next)
        }
    }
}

impl Matcher for KeywordMatcher {
    const KIND: MatcherKind = MatcherKind::Keyword;

    fn configure(pattern: &str, token_type: TokenType) -> Self {
        let keyword = pattern.to_uppercase();
        let word_like = !keyword.is_empty() && keyword.bytes().all(is_word_byte);
        Self {
            keyword,
            word_like,
            token_type,
        }
    }

    fn scan(&self, mut token: Token) -> Outcome {
        let len = self.keyword.len();
        let pos = token.pos;
        // insufficient data is a plain miss
        if len == 0 || pos + len > token.file.len() {
            return Outcome::Miss(token);
        }

        let candidate = String::from_utf8_lossy(&token.file.data()[pos..pos + len]).to_uppercase();
        let next = token.file.data().get(pos + len).copied();
        if candidate != self.keyword || !self.accepts_following(next) {
            return Outcome::Miss(token);
        }

        token.assign(len, self.keyword.clone(), self.token_type.clone());
        Outcome::Hit(token)
    }
}

/// Component scanning a single keyword or operator.
pub type ScanKeyword = Scanner<KeywordMatcher>;
