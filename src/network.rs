//! # Scanner Network
//!
//! Builds and supervises a cascade of scanner components from a
//! [`NetworkConfig`]:
//!
//! ```text
//!  input ─▶ [matcher 1] ─miss─▶ [matcher 2] ─miss─▶ … ─miss─▶ [invalid]
//!               │hit                │hit                         │
//!               ▼                   ▼                             ▼
//!  output ◀───────────────────────────────────────────────────────┘
//! ```
//!
//! Each matcher is a tokio task. The network delivers both configuration
//! values to every matcher before any token flows, merges all hit ports and
//! the fallback into one output, and closes the input to shut down.

use std::sync::Arc;

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info};

use crate::{
    config::{MatcherConfig, MatcherKind, NetworkConfig},
    scanner::{
        CharsMatcher, CommentMatcher, Component, KeywordMatcher, Matcher, QuotedMatcher,
        ScanChars, ScanComment, ScanInvalid, ScanKeyword, ScanQuoted, ScannerPorts,
    },
    source::SourceFile,
    token::{Token, TokenType},
    ScanError, ScanResult,
};

pub struct Network {
    input: Option<mpsc::Sender<Token>>,
    output: mpsc::Receiver<Token>,
    handles: Vec<JoinHandle<()>>,
}

impl Network {
    #[tracing::instrument(level = "debug", skip(config), fields(matchers = config.matchers.len()))]
    pub async fn build(config: &NetworkConfig) -> ScanResult<Self> {
        if config.strict_patterns {
            for matcher in &config.matchers {
                validate(matcher)?;
            }
        }

        let capacity = config.channel_capacity.max(1);
        let (input, mut upstream) = mpsc::channel(capacity);
        let (output_tx, output) = mpsc::channel(capacity);
        let mut handles = Vec::with_capacity(config.matchers.len() + 1);

        for matcher in &config.matchers {
            let (set_tx, set_rx) = mpsc::channel(1);
            let (type_tx, type_rx) = mpsc::channel(1);
            let (miss_tx, miss_rx) = mpsc::channel(capacity);
            let ports = ScannerPorts {
                set: set_rx,
                token_type: type_rx,
                input: upstream,
                hit: output_tx.clone(),
                miss: miss_tx,
            };
            handles.push(spawn(component_for(matcher.kind, ports)));

            set_tx
                .send(matcher.pattern.clone())
                .await
                .map_err(|_| ScanError::ChannelClosed { stage: "set" })?;
            type_tx
                .send(matcher.token_type.clone())
                .await
                .map_err(|_| ScanError::ChannelClosed { stage: "type" })?;
            upstream = miss_rx;
        }

        handles.push(spawn(Box::new(ScanInvalid::new(upstream, output_tx))));
        info!(components = handles.len(), "scanner network started");

        Ok(Self {
            input: Some(input),
            output,
            handles,
        })
    }

    /// Feeds one token into the cascade without waiting for its result.
    pub async fn send(&self, token: Token) -> ScanResult<()> {
        let input = self
            .input
            .as_ref()
            .ok_or(ScanError::ChannelClosed { stage: "input" })?;
        input
            .send(token)
            .await
            .map_err(|_| ScanError::ChannelClosed { stage: "input" })
    }

    /// Next classified token, `None` once the network has shut down.
    pub async fn recv(&mut self) -> Option<Token> {
        self.output.recv().await
    }

    /// Classifies a single token.
    pub async fn scan(&mut self, token: Token) -> ScanResult<Token> {
        self.send(token).await?;
        self.recv()
            .await
            .ok_or(ScanError::ChannelClosed { stage: "output" })
    }

    /// Splits a whole buffer into tokens, feeding each position only after
    /// the previous token is known.
    #[tracing::instrument(level = "debug", skip(self, file), fields(source = %file.name()))]
    pub async fn tokenize(&mut self, file: Arc<SourceFile>) -> ScanResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < file.len() {
            let token = self.scan(Token::new(file.clone(), pos)).await?;
            if token.len == 0 {
                return Err(ScanError::Stalled { pos });
            }
            pos = token.end();
            tokens.push(token);
        }
        debug!(count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    /// Closes the input, collects tokens still in flight and waits for every
    /// component to finish.
    pub async fn shutdown(mut self) -> ScanResult<Vec<Token>> {
        drop(self.input.take());
        let mut pending = Vec::new();
        while let Some(token) = self.output.recv().await {
            pending.push(token);
        }
        for handle in self.handles.drain(..) {
            handle
                .await
                .map_err(|e| ScanError::internal(format!("component task failed: {}", e)))?;
        }
        debug!(pending = pending.len(), "scanner network stopped");
        Ok(pending)
    }
}

fn spawn(mut component: Box<dyn Component>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let name = component.name();
        component.process().await;
        debug!(component = %name, "component finished");
    })
}

fn component_for(kind: MatcherKind, ports: ScannerPorts) -> Box<dyn Component> {
    match kind {
        MatcherKind::Chars => Box::new(ScanChars::new(ports)),
        MatcherKind::Keyword => Box::new(ScanKeyword::new(ports)),
        MatcherKind::Comment => Box::new(ScanComment::new(ports)),
        MatcherKind::Quoted => Box::new(ScanQuoted::new(ports)),
    }
}

/// Checks a matcher configuration the way strict networks require.
pub fn validate(config: &MatcherConfig) -> ScanResult<()> {
    let pattern = config.pattern.as_str();
    let token_type = TokenType::from(config.token_type.as_str());
    match config.kind {
        MatcherKind::Chars => CharsMatcher::try_configure(pattern, token_type).map(drop),
        MatcherKind::Keyword => KeywordMatcher::try_configure(pattern, token_type).map(drop),
        MatcherKind::Comment => CommentMatcher::try_configure(pattern, token_type).map(drop),
        MatcherKind::Quoted => QuotedMatcher::try_configure(pattern, token_type).map(drop),
    }
}
