//! Token model: [`Span`], [`TokenKind`], and [`Token`].
//!
//! # Kind Codes
//!
//! Every kind has a stable numeric code. Single-character tokens use the
//! byte value itself (`0..=255`). Reserved spellings start at
//! [`FIRST_RESERVED`] and follow the order of [`RESERVED`]; the literal and
//! structural classes come right after the table. Code 256 is never used,
//! so the two ranges cannot collide.
//!
//! [`RESERVED`]: crate::keywords::RESERVED

use std::fmt;

use crate::keywords::FIRST_RESERVED;

/// Byte range of a token in the source.
///
/// `start` is inclusive, `end` exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `pos`.
    #[inline]
    pub const fn point(pos: u32) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Closed set of token classifications.
///
/// Variant order below `Char` matches the numeric code order and must not
/// change: codes may be persisted by downstream tools.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Any single character without a rule of its own: `(`, `+`, `,` and so
    /// on. Carries the byte value, which doubles as the kind code. For a
    /// multi-byte UTF-8 character this is the leading byte.
    Char(u8),

    // Keywords
    Else,
    If,
    True,
    False,
    Nil,
    While,
    In,
    New,
    Extends,
    For,
    Async,
    Yield,

    // Multi-character operators
    /// `&&`
    BoolAnd,
    /// `||`
    BoolOr,
    /// `>>`
    RShift,
    /// `<<`
    LShift,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `..`
    Concat,
    /// `_/`
    FloorDiv,
    /// `...`
    Vararg,

    // Literal classes
    /// Numeric literal, text kept exactly as written.
    Num,
    /// Quoted string, text includes both quotes.
    String,
    /// Identifier that is not a keyword.
    Name,

    // Structural
    /// A run of blanks, kept for exact source reconstruction.
    White,
    /// End of input. Always the last token, always empty.
    End,
}

/// Every non-`Char` kind, indexed by `code - FIRST_RESERVED`.
const CODED_KINDS: [TokenKind; 28] = [
    TokenKind::Else,
    TokenKind::If,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Nil,
    TokenKind::While,
    TokenKind::In,
    TokenKind::New,
    TokenKind::Extends,
    TokenKind::For,
    TokenKind::Async,
    TokenKind::Yield,
    TokenKind::BoolAnd,
    TokenKind::BoolOr,
    TokenKind::RShift,
    TokenKind::LShift,
    TokenKind::Eq,
    TokenKind::Neq,
    TokenKind::Ge,
    TokenKind::Le,
    TokenKind::Concat,
    TokenKind::FloorDiv,
    TokenKind::Vararg,
    TokenKind::Num,
    TokenKind::String,
    TokenKind::Name,
    TokenKind::White,
    TokenKind::End,
];

impl TokenKind {
    /// Numeric kind code (see the module docs).
    pub fn code(self) -> u16 {
        let ordinal = match self {
            TokenKind::Char(b) => return u16::from(b),
            TokenKind::Else => 0,
            TokenKind::If => 1,
            TokenKind::True => 2,
            TokenKind::False => 3,
            TokenKind::Nil => 4,
            TokenKind::While => 5,
            TokenKind::In => 6,
            TokenKind::New => 7,
            TokenKind::Extends => 8,
            TokenKind::For => 9,
            TokenKind::Async => 10,
            TokenKind::Yield => 11,
            TokenKind::BoolAnd => 12,
            TokenKind::BoolOr => 13,
            TokenKind::RShift => 14,
            TokenKind::LShift => 15,
            TokenKind::Eq => 16,
            TokenKind::Neq => 17,
            TokenKind::Ge => 18,
            TokenKind::Le => 19,
            TokenKind::Concat => 20,
            TokenKind::FloorDiv => 21,
            TokenKind::Vararg => 22,
            TokenKind::Num => 23,
            TokenKind::String => 24,
            TokenKind::Name => 25,
            TokenKind::White => 26,
            TokenKind::End => 27,
        };
        FIRST_RESERVED + ordinal
    }

    /// Inverse of [`code()`](Self::code).
    ///
    /// Returns `None` for 256 and for codes past the last class.
    pub fn from_code(code: u16) -> Option<TokenKind> {
        if let Ok(byte) = u8::try_from(code) {
            return Some(TokenKind::Char(byte));
        }
        let index = code.checked_sub(FIRST_RESERVED)?;
        CODED_KINDS.get(usize::from(index)).copied()
    }

    /// Canonical source spelling for kinds that have exactly one.
    ///
    /// Keywords and multi-character operators return their reserved
    /// spelling. `Char` returns the character for ASCII bytes. Literal and
    /// structural classes have no fixed spelling.
    pub fn spelling(self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Else => "else",
            TokenKind::If => "if",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Nil => "nil",
            TokenKind::While => "while",
            TokenKind::In => "in",
            TokenKind::New => "new",
            TokenKind::Extends => "extends",
            TokenKind::For => "for",
            TokenKind::Async => "async",
            TokenKind::Yield => "yield",
            TokenKind::BoolAnd => "&&",
            TokenKind::BoolOr => "||",
            TokenKind::RShift => ">>",
            TokenKind::LShift => "<<",
            TokenKind::Eq => "==",
            TokenKind::Neq => "!=",
            TokenKind::Ge => ">=",
            TokenKind::Le => "<=",
            TokenKind::Concat => "..",
            TokenKind::FloorDiv => "_/",
            TokenKind::Vararg => "...",
            TokenKind::Char(b) if b.is_ascii() => return ascii_spelling(b),
            TokenKind::Char(_)
            | TokenKind::Num
            | TokenKind::String
            | TokenKind::Name
            | TokenKind::White
            | TokenKind::End => return None,
        };
        Some(s)
    }

    /// Human-readable name for diagnostics.
    ///
    /// Fixed spellings are returned as-is; classes use bracketed names
    /// (`[num]`, `[str]`, `[name]`, `[white]`, `[eof]`). Non-ASCII lead
    /// bytes are `[char]`.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Num => "[num]",
            TokenKind::String => "[str]",
            TokenKind::Name => "[name]",
            TokenKind::White => "[white]",
            TokenKind::End => "[eof]",
            _ => self.spelling().unwrap_or("[char]"),
        }
    }

    /// Returns `true` for the twelve reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Else
                | TokenKind::If
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
                | TokenKind::While
                | TokenKind::In
                | TokenKind::New
                | TokenKind::Extends
                | TokenKind::For
                | TokenKind::Async
                | TokenKind::Yield
        )
    }
}

/// Every ASCII byte, in order, so a one-byte `&'static str` can be cut out.
static ASCII_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0u8;
    while i < 128 {
        table[i as usize] = i;
        i += 1;
    }
    table
};

/// One-character `&'static str` for an ASCII byte.
fn ascii_spelling(b: u8) -> Option<&'static str> {
    let i = usize::from(b);
    ASCII_TABLE
        .get(i..=i)
        .and_then(|bytes| std::str::from_utf8(bytes).ok())
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TokenKind::Char(b) if b.is_ascii_graphic() => write!(f, "'{}'", char::from(b)),
            TokenKind::Char(b) => write!(f, "byte {b:#04x}"),
            kind => f.write_str(kind.display_name()),
        }
    }
}

/// A classified lexeme.
///
/// `line` is the 1-based line the token starts on. `text` is the source
/// text of the token, except that carriage returns are never part of it.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {}:{}",
            self.kind, self.text, self.line, self.span
        )
    }
}
