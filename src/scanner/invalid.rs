//! # Invalid-Token Fallback
//!
//! Terminal component of a cascade. It has no configuration and a single
//! output: every token it receives is stamped [`TokenType::INVALID`] with the
//! one character at its position as value, so that every token leaving a
//! network carries a classification.

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::Component;
use crate::token::{Token, TokenType};

/// Classifies the character at the token position as invalid.
///
/// The value is one UTF-8 character, or one lossily decoded byte when the
/// input is not valid UTF-8 there. At the end of input the value is empty.
pub fn mark_invalid(mut token: Token) -> Token {
    let len = token.file.char_len_at(token.pos);
    let value = token.file.text(token.pos, len);
    token.assign(len, value, TokenType::invalid());
    token
}

pub struct ScanInvalid {
    input: mpsc::Receiver<Token>,
    output: mpsc::Sender<Token>,
}

impl ScanInvalid {
    pub fn new(input: mpsc::Receiver<Token>, output: mpsc::Sender<Token>) -> Self {
        Self { input, output }
    }

    #[tracing::instrument(level = "debug", skip(self), name = "invalid")]
    pub async fn run(&mut self) {
        while let Some(token) = self.input.recv().await {
            let token = mark_invalid(token);
            trace!(pos = token.pos, value = %token.value, "invalid");
            if self.output.send(token).await.is_err() {
                debug!("output closed, stopping");
                return;
            }
        }
        debug!("input closed");
    }
}

#[async_trait]
impl Component for ScanInvalid {
    fn name(&self) -> String {
        "invalid".to_string()
    }

    async fn process(&mut self) {
        self.run().await
    }
}
