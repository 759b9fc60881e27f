//! Quoted string literals.
//!
//! Both quote characters open a string that runs to the next unescaped
//! matching quote. The token text includes both quotes and every escape
//! sequence verbatim; escapes are not interpreted here.
//!
//! A backslash makes the following character opaque, so `\"` never closes
//! a `"` string. Line breaks are the exception: a backslash before a line
//! break escapes nothing.
//!
//! `"` strings may not contain a raw line break. `'` strings may span
//! lines; carriage returns inside them are dropped from the token text.
//! The token reports the line its opening quote is on.

use super::Scanner;
use crate::{LexError, Span, TokenKind};

impl Scanner<'_> {
    pub(super) fn string(&mut self, start: u32) -> Result<(), LexError> {
        let quote = self.cursor.current();
        let line = self.line;
        self.cursor.advance();

        let mut text = String::new();
        let mut segment = start;
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b if b == quote => {
                    self.cursor.advance();
                    text.push_str(self.cursor.slice_from(segment));
                    let span = Span::new(start, self.cursor.pos());
                    self.push(TokenKind::String, text, line, span);
                    return Ok(());
                }
                b'\\' => {
                    self.cursor.advance();
                    match self.cursor.current() {
                        0 if self.cursor.is_eof() => {
                            return Err(LexError::unexpected_end_of_input(
                                "string escape",
                                line,
                                start,
                            ));
                        }
                        b'\n' | b'\r' => {}
                        _ => self.cursor.advance_char(),
                    }
                }
                b'\n' if quote == b'\'' => {
                    self.cursor.advance();
                    self.line += 1;
                }
                b'\r' if quote == b'\'' => {
                    text.push_str(self.cursor.slice_from(segment));
                    self.cursor.advance();
                    segment = self.cursor.pos();
                }
                // Raw line break in a `"` string, or end of input.
                _ => return Err(LexError::unterminated_string(quote, line, start)),
            }
        }
    }
}
