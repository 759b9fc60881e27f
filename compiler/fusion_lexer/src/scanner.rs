//! Top-level character dispatch.
//!
//! One `match` over the current byte picks a rule; every arm consumes at
//! least one byte or returns, so the loop is bounded by the input length.
//! Operators are matched longest-first: `>>` and `>=` are tried before a
//! bare `>`. Numeric literals live in [`number`], quoted strings in
//! [`string`].
//!
//! Carriage returns are skipped without a token; newlines are skipped and
//! bump the line counter. Every other byte ends up inside exactly one token
//! (blank runs included, unless the config drops them).

use fusion_lexer_core::Cursor;
use tracing::trace;

use crate::keywords::lookup_keyword;
use crate::{LexError, LexerConfig, Span, Token, TokenKind};

mod number;
mod string;

/// Mutable state for one `tokenize` call.
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// 1-based line of the byte under the cursor.
    line: u32,
    emit_whitespace: bool,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>, config: &LexerConfig) -> Self {
        // Typical source averages a token every few bytes.
        let capacity = cursor.source_len() as usize / 4 + 1;
        Self {
            cursor,
            line: 1,
            emit_whitespace: config.emit_whitespace,
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Scan the whole input, ending with exactly one `End` token.
    pub(crate) fn run(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            let start = self.cursor.pos();
            match self.cursor.current() {
                0 if self.cursor.is_eof() => {
                    self.push(TokenKind::End, String::new(), self.line, Span::point(start));
                    return Ok(self.tokens);
                }
                b'\r' => self.cursor.advance(),
                b'\n' => {
                    self.cursor.advance();
                    self.line += 1;
                }
                b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
                b'&' => self.followed_by(start, b'&', TokenKind::BoolAnd),
                b'|' => self.followed_by(start, b'|', TokenKind::BoolOr),
                b'>' => self.angle(start, TokenKind::RShift, TokenKind::Ge),
                b'<' => self.angle(start, TokenKind::LShift, TokenKind::Le),
                b'=' => self.followed_by(start, b'=', TokenKind::Eq),
                b'!' => self.followed_by(start, b'=', TokenKind::Neq),
                b'.' => self.dot(start)?,
                b'_' => self.underscore(start),
                b'"' | b'\'' => self.string(start)?,
                b'0'..=b'9' => self.number(start)?,
                b'a'..=b'z' | b'A'..=b'Z' => self.identifier(start),
                _ => self.single(start),
            }
        }
    }

    // ─── Emission ───────────────────────────────────────────────────────

    /// Emit `kind` covering `start..pos` on the current line.
    fn emit(&mut self, kind: TokenKind, start: u32) {
        let text = self.cursor.slice_from(start).to_owned();
        let span = Span::new(start, self.cursor.pos());
        self.push(kind, text, self.line, span);
    }

    fn push(&mut self, kind: TokenKind, text: String, line: u32, span: Span) {
        trace!(%kind, line, %span, "token");
        self.tokens.push(Token::new(kind, text, line, span));
    }

    // ─── Whitespace ─────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) {
        self.cursor.eat_whitespace();
        if self.emit_whitespace {
            self.emit(TokenKind::White, start);
        }
    }

    // ─── Operators ──────────────────────────────────────────────────────

    /// Single character token for the byte under the cursor.
    ///
    /// Multi-byte UTF-8 characters are consumed whole and classified by
    /// their leading byte.
    fn single(&mut self, start: u32) {
        let byte = self.cursor.current();
        self.cursor.advance_char();
        self.emit(TokenKind::Char(byte), start);
    }

    /// `kind` if the current byte is followed by `next`, else the current
    /// byte alone.
    fn followed_by(&mut self, start: u32, next: u8, kind: TokenKind) {
        let first = self.cursor.current();
        self.cursor.advance();
        if self.cursor.current() == next {
            self.cursor.advance();
            self.emit(kind, start);
        } else {
            self.emit(TokenKind::Char(first), start);
        }
    }

    /// `>` and `<`: doubled is a shift, followed by `=` a comparison.
    fn angle(&mut self, start: u32, shift: TokenKind, compare: TokenKind) {
        let first = self.cursor.current();
        self.cursor.advance();
        match self.cursor.current() {
            b if b == first => {
                self.cursor.advance();
                self.emit(shift, start);
            }
            b'=' => {
                self.cursor.advance();
                self.emit(compare, start);
            }
            _ => self.emit(TokenKind::Char(first), start),
        }
    }

    /// `.5` is a number; otherwise `...`, `..`, or `.`.
    fn dot(&mut self, start: u32) -> Result<(), LexError> {
        if self.recognize_number(start)? {
            self.emit(TokenKind::Num, start);
            return Ok(());
        }
        self.cursor.advance();
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            if self.cursor.current() == b'.' {
                self.cursor.advance();
                self.emit(TokenKind::Vararg, start);
            } else {
                self.emit(TokenKind::Concat, start);
            }
        } else {
            self.emit(TokenKind::Char(b'.'), start);
        }
        Ok(())
    }

    /// `_/` is floor division; `_` followed by a name byte starts a name.
    fn underscore(&mut self, start: u32) {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.emit(TokenKind::FloorDiv, start);
            }
            next if is_ident_continue(next) => self.identifier(start),
            _ => self.single(start),
        }
    }

    // ─── Identifiers ────────────────────────────────────────────────────

    /// Maximal `[A-Za-z0-9_]` run, then an exact keyword lookup.
    fn identifier(&mut self, start: u32) {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = lookup_keyword(text).unwrap_or(TokenKind::Name);
        self.emit(kind, start);
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. The sentinel maps to `false`.
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        table[i] = matches!(
            i,
            0x61..=0x7A | 0x41..=0x5A | 0x30..=0x39 | 0x5F
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[usize::from(b)]
}
