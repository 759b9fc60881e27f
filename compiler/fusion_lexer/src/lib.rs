//! Lexical scanner for the Fusion scripting language.
//!
//! [`tokenize`] turns a whole source text into a flat token list ending in
//! a single [`TokenKind::End`]. Tokens own their text and carry the 1-based
//! line they start on plus a byte [`Span`]. Scanning stops at the first
//! error; no partial list is returned.
//!
//! Byte-level navigation lives in `fusion_lexer_core`; this crate owns the
//! token vocabulary, the reserved-word table, and the dispatch rules.
//!
//! ```
//! use fusion_lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x >= 0x1p4").unwrap_or_default();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Name,
//!         TokenKind::White,
//!         TokenKind::Ge,
//!         TokenKind::White,
//!         TokenKind::Num,
//!         TokenKind::End,
//!     ]
//! );
//! ```

mod config;
pub mod keywords;
mod lex_error;
mod scanner;
mod token;

use fusion_lexer_core::SourceBuffer;
use tracing::debug;

pub use config::LexerConfig;
pub use keywords::{lookup_keyword, FIRST_RESERVED, RESERVED};
pub use lex_error::{LexError, LexErrorKind};
pub use token::{Span, Token, TokenKind};

/// Tokenize `source` with the default config (whitespace tokens included).
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &LexerConfig::default())
}

/// Tokenize `source` with explicit options.
///
/// # Errors
///
/// Returns the first [`LexError`] encountered. Sources longer than
/// `u32::MAX` bytes are rejected up front with
/// [`LexErrorKind::SourceTooLarge`].
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::source_too_large(source.len()));
    }

    let buffer = SourceBuffer::new(source);
    let result = scanner::Scanner::new(buffer.cursor(), config).run();
    match &result {
        Ok(tokens) => debug!(count = tokens.len(), "tokenized"),
        Err(err) => debug!(%err, "lex error"),
    }
    result
}
