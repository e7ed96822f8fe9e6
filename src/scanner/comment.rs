//! # Comment Matcher
//!
//! Recognizes a line comment introduced by a single prefix character, such as
//! `#` or `;`. The captured value starts with the prefix and runs up to, but
//! not including, the next `\n`, `\r` or sentinel. Seeing the prefix is
//! enough for a hit, even when nothing follows it.

use super::{Matcher, Outcome, Scanner};
use crate::{
    config::MatcherKind,
    token::{Token, TokenType},
};

#[derive(Debug, Clone)]
pub struct CommentMatcher {
    prefix: Option<u8>,
    token_type: TokenType,
}

impl Matcher for CommentMatcher {
    const KIND: MatcherKind = MatcherKind::Comment;

    fn configure(pattern: &str, token_type: TokenType) -> Self {
        // only the first byte of the pattern is significant
        Self {
            prefix: pattern.bytes().next(),
            token_type,
        }
    }

    fn scan(&self, mut token: Token) -> Outcome {
        let Some(prefix) = self.prefix else {
            return Outcome::Miss(token);
        };
        if token.file.byte_at(token.pos) != prefix {
            return Outcome::Miss(token);
        }
        let len = token
            .file
            .run_len(token.pos, |b| b != b'\n' && b != b'\r');
        let value = token.file.text(token.pos, len);
        token.assign(len, value, self.token_type.clone());
        Outcome::Hit(token)
    }
}

/// Component scanning prefix-to-end-of-line comments.
pub type ScanComment = Scanner<CommentMatcher>;
