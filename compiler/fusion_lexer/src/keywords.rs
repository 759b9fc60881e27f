//! Reserved keyword and operator table.
//!
//! [`RESERVED`] lists every reserved word and every multi-character operator
//! in a fixed order. A kind's code is `FIRST_RESERVED + index` in this
//! table, so the order is part of the stable kind numbering and entries may
//! only ever be appended.
//!
//! # Lookup
//!
//! The identifier scanner hands [`lookup_keyword`] the maximal run of
//! `[A-Za-z0-9_]` bytes it collected. Matching is exact and case-sensitive:
//! `While` and `while1` are names. Operator spellings never match because an
//! identifier run cannot contain them.

use crate::TokenKind;

/// First code above every single-byte character code (`0..=255`).
///
/// Code 256 is deliberately unused.
pub const FIRST_RESERVED: u16 = 257;

/// Reserved spellings in code order.
pub static RESERVED: [(&str, TokenKind); 23] = [
    // Keywords
    ("else", TokenKind::Else),
    ("if", TokenKind::If),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("nil", TokenKind::Nil),
    ("while", TokenKind::While),
    ("in", TokenKind::In),
    ("new", TokenKind::New),
    ("extends", TokenKind::Extends),
    ("for", TokenKind::For),
    ("async", TokenKind::Async),
    ("yield", TokenKind::Yield),
    // Multi-character operators
    ("&&", TokenKind::BoolAnd),
    ("||", TokenKind::BoolOr),
    (">>", TokenKind::RShift),
    ("<<", TokenKind::LShift),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Neq),
    (">=", TokenKind::Ge),
    ("<=", TokenKind::Le),
    ("..", TokenKind::Concat),
    ("_/", TokenKind::FloorDiv),
    ("...", TokenKind::Vararg),
];

/// Number of leading [`RESERVED`] entries that are keywords.
const KEYWORD_COUNT: usize = 12;

/// Look up a reserved keyword by exact spelling.
///
/// Returns `None` for ordinary identifiers. Keywords are 2-7 bytes long and
/// start with a lowercase letter, which rejects most identifiers before any
/// string comparison.
#[inline]
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    let len = text.len();
    if !(2..=7).contains(&len) || !text.as_bytes()[0].is_ascii_lowercase() {
        return None;
    }
    RESERVED[..KEYWORD_COUNT]
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|&(_, kind)| kind)
}

#[cfg(test)]
mod tests;
