//! # Scanner Components
//!
//! Every scanner is an independent task connected to the rest of a network
//! only through its ports. All matchers share one port signature:
//!
//! ```text
//!            set (IIP)   type (IIP)
//!               │            │
//!               ▼            ▼
//!  in ───▶ ┌─────────────────────┐ ───▶ hit
//!          │    Scanner<M>       │
//!          └─────────────────────┘ ───▶ miss
//! ```
//!
//! ## Protocol
//!
//! 1. Read the pattern from `set`, then the label from `type`. Each is read
//!    exactly once. If either port closes first the component returns
//!    without touching `in`.
//! 2. Receive tokens from `in` until it closes. Each token goes to exactly
//!    one of `hit` or `miss`, in arrival order.
//!
//! Backpressure comes from the bounded channels alone: a component waits
//! while its downstream port is full.
//!
//! ## Component Structure
//!
//! * [`chars`]: maximal runs of a character set or regex class
//! * [`keyword`]: case-insensitive keywords and operators with boundary checks
//! * [`comment`]: prefix-to-end-of-line comments
//! * [`quoted`]: delimited literals with backslash escapes
//! * [`invalid`]: terminal fallback with a single output

use std::marker::PhantomData;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::{
    config::MatcherKind,
    token::{Token, TokenType},
    ScanError, ScanResult,
};

pub mod chars;
pub mod comment;
pub mod invalid;
pub mod keyword;
pub mod quoted;

pub use chars::{CharSet, CharsMatcher, ScanChars};
pub use comment::{CommentMatcher, ScanComment};
pub use invalid::ScanInvalid;
pub use keyword::{KeywordMatcher, ScanKeyword};
pub use quoted::{QuotedMatcher, ScanQuoted};

/// Result of one matching attempt. Both arms hand the token back.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Hit(Token),
    Miss(Token),
}

impl Outcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_))
    }

    pub fn into_token(self) -> Token {
        match self {
            Outcome::Hit(token) | Outcome::Miss(token) => token,
        }
    }
}

/// Recognition algorithm behind a [`Scanner`].
///
/// A matcher is built once from the two configuration values and is then a
/// pure function of (buffer, position). It never fails: text it does not
/// recognize is a [`Outcome::Miss`].
pub trait Matcher: Send + Sync + Sized + 'static {
    const KIND: MatcherKind;

    fn configure(pattern: &str, token_type: TokenType) -> Self;

    /// Like [`Matcher::configure`] but rejects patterns that would leave the
    /// matcher unable to ever hit.
    fn try_configure(pattern: &str, token_type: TokenType) -> ScanResult<Self> {
        if pattern.is_empty() {
            return Err(ScanError::EmptyPattern { kind: Self::KIND });
        }
        Ok(Self::configure(pattern, token_type))
    }

    fn scan(&self, token: Token) -> Outcome;
}

/// The five ports of a matcher component.
#[derive(Debug)]
pub struct ScannerPorts {
    pub set: mpsc::Receiver<String>,
    pub token_type: mpsc::Receiver<String>,
    pub input: mpsc::Receiver<Token>,
    pub hit: mpsc::Sender<Token>,
    pub miss: mpsc::Sender<Token>,
}

/// The outside ends of a [`ScannerPorts`] set.
#[derive(Debug)]
pub struct ScannerIo {
    pub set: mpsc::Sender<String>,
    pub token_type: mpsc::Sender<String>,
    pub input: mpsc::Sender<Token>,
    pub hit: mpsc::Receiver<Token>,
    pub miss: mpsc::Receiver<Token>,
}

impl ScannerPorts {
    /// Creates a standalone port set: IIP ports hold one value, token ports
    /// hold `capacity` tokens (at least one).
    pub fn pair(capacity: usize) -> (ScannerPorts, ScannerIo) {
        let capacity = capacity.max(1);
        let (set_tx, set_rx) = mpsc::channel(1);
        let (type_tx, type_rx) = mpsc::channel(1);
        let (in_tx, in_rx) = mpsc::channel(capacity);
        let (hit_tx, hit_rx) = mpsc::channel(capacity);
        let (miss_tx, miss_rx) = mpsc::channel(capacity);
        (
            ScannerPorts {
                set: set_rx,
                token_type: type_rx,
                input: in_rx,
                hit: hit_tx,
                miss: miss_tx,
            },
            ScannerIo {
                set: set_tx,
                token_type: type_tx,
                input: in_tx,
                hit: hit_rx,
                miss: miss_rx,
            },
        )
    }
}

/// A running unit of a scanner network.
#[async_trait]
pub trait Component: Send {
    fn name(&self) -> String;

    /// Runs until the input port closes (or configuration never arrives).
    async fn process(&mut self);
}

/// Matcher component speaking the shared port protocol.
pub struct Scanner<M> {
    ports: ScannerPorts,
    matcher: PhantomData<fn() -> M>,
}

impl<M: Matcher> Scanner<M> {
    pub fn new(ports: ScannerPorts) -> Self {
        Self {
            ports,
            matcher: PhantomData,
        }
    }

    async fn configure(&mut self) -> Option<M> {
        let Some(pattern) = self.ports.set.recv().await else {
            debug!("set port closed before configuration");
            return None;
        };
        let Some(label) = self.ports.token_type.recv().await else {
            debug!("type port closed before configuration");
            return None;
        };
        debug!(pattern = %pattern, token_type = %label, "configured");
        Some(M::configure(&pattern, TokenType::from(label)))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(kind = %M::KIND))]
    pub async fn run(&mut self) {
        let Some(matcher) = self.configure().await else {
            return;
        };

        while let Some(token) = self.ports.input.recv().await {
            let pos = token.pos;
            let sent = match matcher.scan(token) {
                Outcome::Hit(token) => {
                    trace!(pos, value = %token.value, "hit");
                    self.ports.hit.send(token).await.map_err(|_| "hit")
                }
                Outcome::Miss(token) => {
                    trace!(pos, "miss");
                    self.ports.miss.send(token).await.map_err(|_| "miss")
                }
            };
            if let Err(port) = sent {
                debug!(port, "downstream closed, stopping");
                return;
            }
        }
        debug!("input closed");
    }
}

#[async_trait]
impl<M: Matcher> Component for Scanner<M> {
    fn name(&self) -> String {
        M::KIND.to_string()
    }

    async fn process(&mut self) {
        self.run().await
    }
}
