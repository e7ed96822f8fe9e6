//! # KAIREI Scanner: Token Recognition Network
//!
//! The scanner is a network of small, independent matcher components. Each
//! one receives candidate token positions, tries to recognize one lexical
//! pattern there, and routes the token to a *hit* or a *miss* port.
//! Chaining misses into the next matcher's input forms an ordered cascade
//! of alternatives.
//!
//! ## Pipeline
//!
//! ```text
//! SourceFile → Token(pos) → [keyword] → [chars] → [comment] → … → [invalid]
//!                               │hit       │hit       │hit           │
//!                               └──────────┴──────────┴──────────────┴─▶ consumer
//! ```
//!
//! ## Components
//!
//! - Source buffer and sentinel convention ([`source`])
//! - Tokens and labels ([`token`])
//! - Port contract and matchers ([`scanner`])
//! - Cascade construction and supervision ([`network`])
//! - JSON configuration ([`config`])
//! - Errors ([`error`])
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kairei_scanner::{
//!     config::{MatcherKind, NetworkConfig},
//!     network::Network,
//!     source::SourceFile,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NetworkConfig::default()
//!     .with_matcher(MatcherKind::Keyword, "SELECT", "KW_SELECT")
//!     .with_matcher(MatcherKind::Chars, r" \t\n", "SPACE")
//!     .with_matcher(MatcherKind::Chars, "[a-zA-Z_]", "IDENT");
//!
//! let mut network = Network::build(&config).await?;
//! let tokens = network
//!     .tokenize(Arc::new(SourceFile::from_text("select name")))
//!     .await?;
//! network.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod network;
pub mod scanner;
pub mod source;
pub mod token;

// Re-exports
pub use error::*;
pub use token::{Token, TokenType};
