//! # Quoted-Literal Matcher
//!
//! The set IIP lists the accepted opening delimiters (for example `"'`). A
//! literal opened by one of them ends at the next unescaped occurrence of the
//! same delimiter. A backslash escapes whatever byte follows it, including
//! the delimiter and another backslash. The hit value is the raw lexeme with
//! both delimiters and escapes left in place.
//!
//! An unterminated literal (sentinel or end of input before the closing
//! delimiter) is a miss.

use super::{Matcher, Outcome, Scanner};
use crate::{
    config::MatcherKind,
    source::SENTINEL,
    token::{Token, TokenType},
};

const ESCAPE: u8 = b'\\';

#[derive(Debug, Clone)]
pub struct QuotedMatcher {
    delimiters: Vec<u8>,
    token_type: TokenType,
}

impl QuotedMatcher {
    /// Length of the literal opened at `pos`, closing delimiter included.
    fn literal_len(&self, token: &Token) -> Option<usize> {
        let file = &token.file;
        let open = file.byte_at(token.pos);
        if open == SENTINEL || !self.delimiters.contains(&open) {
            return None;
        }
        let mut i = token.pos + 1;
        loop {
            match file.byte_at(i) {
                SENTINEL => return None,
                ESCAPE => {
                    if file.byte_at(i + 1) == SENTINEL {
                        return None;
                    }
                    i += 2;
                }
                b if b == open => return Some(i + 1 - token.pos),
                _ => i += 1,
            }
        }
    }
}

impl Matcher for QuotedMatcher {
    const KIND: MatcherKind = MatcherKind::Quoted;

    fn configure(pattern: &str, token_type: TokenType) -> Self {
        Self {
            delimiters: pattern.bytes().filter(|b| *b != ESCAPE).collect(),
            token_type,
        }
    }

    fn scan(&self, mut token: Token) -> Outcome {
        let Some(len) = self.literal_len(&token) else {
            return Outcome::Miss(token);
        };
        let value = token.file.text(token.pos, len);
        token.assign(len, value, self.token_type.clone());
        Outcome::Hit(token)
    }
}

/// Component scanning delimited string literals.
pub type ScanQuoted = Scanner<QuotedMatcher>;
