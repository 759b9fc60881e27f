//! `fusion lex`: tokenize a file and display the token stream.

use std::fmt::Write as _;

use fusion_lexer::{tokenize_with, LexError, LexerConfig, Token};
use tracing::debug;

use super::read_file;

/// Flags accepted by `fusion lex`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexOptions {
    /// Include `[white]` tokens (`--no-whitespace` clears this).
    pub emit_whitespace: bool,
    /// Prefix each token with its numeric kind code (`--codes`).
    pub show_codes: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            emit_whitespace: true,
            show_codes: false,
        }
    }
}

impl LexOptions {
    fn lexer_config(self) -> LexerConfig {
        LexerConfig {
            emit_whitespace: self.emit_whitespace,
        }
    }
}

/// Lex a file and print the token stream. Exits with status 1 on error.
pub fn lex_file(path: &str, options: &LexOptions) {
    let content = read_file(path);
    match lex_source(path, &content, options) {
        Ok(listing) => print!("{listing}"),
        Err(err) => {
            eprintln!("error: {path}: {err}");
            std::process::exit(1);
        }
    }
}

/// Tokenize `source` and render the listing `lex_file` prints.
pub fn lex_source(path: &str, source: &str, options: &LexOptions) -> Result<String, LexError> {
    let tokens = tokenize_with(source, &options.lexer_config())?;
    debug!(path, count = tokens.len(), "lexed file");
    Ok(render_tokens(path, &tokens, options))
}

/// One header line, then one indented line per token.
pub fn render_tokens(path: &str, tokens: &[Token], options: &LexOptions) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in tokens {
        if options.show_codes {
            let _ = writeln!(out, "  {:>3} {:?}", tok.kind.code(), tok);
        } else {
            let _ = writeln!(out, "  {tok:?}");
        }
    }
    out
}
