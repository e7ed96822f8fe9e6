use std::{fmt, sync::Arc};

use crate::source::SourceFile;

/// Classification label stamped on a token by the matcher that recognized it.
///
/// Labels are opaque to the scanner; their meaning belongs to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenType(String);

impl TokenType {
    /// Label given by the terminal fallback to text nothing else recognized.
    pub const INVALID: &'static str = "INVALID";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn invalid() -> Self {
        Self::new(Self::INVALID)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_invalid(&self) -> bool {
        self.0 == Self::INVALID
    }
}

impl From<&str> for TokenType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TokenType {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A position-anchored unit of scanning work.
///
/// A token starts empty and travels through matchers by value. The one
/// matcher that recognizes text at `pos` fills in `value`, `len` and
/// `token_type`. `len` counts source bytes, which can differ from the byte
/// length of `value` (keywords are canonicalized, broken UTF-8 is decoded
/// lossily).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub file: Arc<SourceFile>,
    pub pos: usize,
    pub len: usize,
    pub value: String,
    pub token_type: Option<TokenType>,
}

impl Token {
    pub fn new(file: Arc<SourceFile>, pos: usize) -> Self {
        debug_assert!(pos <= file.len());
        Self {
            file,
            pos,
            len: 0,
            value: String::new(),
            token_type: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token_type.is_none()
    }

    /// Records a match covering `len` source bytes.
    pub fn assign(&mut self, len: usize, value: String, token_type: TokenType) {
        self.len = len;
        self.value = value;
        self.token_type = Some(token_type);
    }

    /// Position right after the matched text.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_end() {
        let file = Arc::new(SourceFile::from_text("let x"));
        let mut token = Token::new(file, 4);
        assert!(token.is_empty());

        token.assign(1, "x".to_string(), "IDENT".into());
        assert!(!token.is_empty());
        assert_eq!(token.end(), 5);
        assert_eq!(token.token_type, Some(TokenType::new("IDENT")));
    }

    #[test]
    fn test_invalid_label() {
        assert!(TokenType::invalid().is_invalid());
        assert!(!TokenType::from("KW_SELECT").is_invalid());
        assert_eq!(TokenType::invalid().to_string(), "INVALID");
    }
}
