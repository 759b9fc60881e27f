//! Per-call lexer options.

/// Options for [`tokenize_with`](crate::tokenize_with).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Emit a `White` token for each run of blanks. When `false` blank runs
    /// are consumed silently; line tracking is unaffected.
    pub emit_whitespace: bool,
}

impl LexerConfig {
    /// Config that drops blank runs from the output.
    pub const fn without_whitespace() -> Self {
        LexerConfig {
            emit_whitespace: false,
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            emit_whitespace: true,
        }
    }
}
