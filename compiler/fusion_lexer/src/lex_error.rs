//! Lexer error types.
//!
//! Every lexical error ends the `tokenize` call: there is no recovery and
//! no partial token list. An error records WHAT went wrong (`kind`) and
//! WHERE the offending construct began (`line`, `pos`).

/// A lexical error, located at the start of the construct that failed.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at line {line}, byte {pos}")]
pub struct LexError {
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// 1-based line where the failing construct began.
    pub line: u32,
    /// Byte offset where the failing construct began.
    pub pos: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No closing quote before end of input, or a raw line break inside a
    /// double-quoted string.
    #[error("unterminated string literal (missing closing {quote})")]
    UnterminatedString { quote: char },
    /// `0x` without a hex digit, or a hex exponent without digits.
    #[error("invalid numeric literal")]
    InvalidNumericLiteral,
    /// Input ended inside a multi-character construct.
    #[error("unexpected end of input in {context}")]
    UnexpectedEndOfInput { context: &'static str },
    /// Source does not fit in `u32` byte offsets.
    #[error("source is {len} bytes, larger than the {} byte limit", u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    #[cold]
    pub fn unterminated_string(quote: u8, line: u32, pos: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnterminatedString {
                quote: char::from(quote),
            },
            line,
            pos,
        }
    }

    #[cold]
    pub fn invalid_numeric_literal(line: u32, pos: u32) -> Self {
        LexError {
            kind: LexErrorKind::InvalidNumericLiteral,
            line,
            pos,
        }
    }

    #[cold]
    pub fn unexpected_end_of_input(context: &'static str, line: u32, pos: u32) -> Self {
        LexError {
            kind: LexErrorKind::UnexpectedEndOfInput { context },
            line,
            pos,
        }
    }

    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            kind: LexErrorKind::SourceTooLarge { len },
            line: 1,
            pos: 0,
        }
    }
}
