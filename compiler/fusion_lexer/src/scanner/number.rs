//! Numeric literal recognition.
//!
//! Two shapes are accepted:
//!
//! - decimal: `digits [. digits]` with at least one digit on either side of
//!   the point (`12`, `1.5`, `.5`, `5.`). A `.` followed by another `.` is
//!   left for the concatenation operator, so `1..2` is three tokens.
//! - hexadecimal: `0x` or `0X`, one or more hex digits, then an optional
//!   binary exponent `p`/`P` with optional sign and one or more decimal
//!   digits (`0x1Ap3`, `0xffP-2`).
//!
//! The token text is always the exact source slice; no value is computed.

use super::Scanner;
use crate::{LexError, TokenKind};

impl Scanner<'_> {
    /// Digit dispatch: the literal must be well formed.
    pub(super) fn number(&mut self, start: u32) -> Result<(), LexError> {
        if self.recognize_number(start)? {
            self.emit(TokenKind::Num, start);
            Ok(())
        } else {
            Err(LexError::invalid_numeric_literal(self.line, start))
        }
    }

    /// Try to consume a numeric literal starting at `start`.
    ///
    /// Returns `Ok(false)` with the cursor where it was when nothing
    /// numeric is found. A hex exponent that is started but has no digits
    /// is an error, since backing out would split `0x1p` into a number
    /// and a name.
    pub(super) fn recognize_number(&mut self, start: u32) -> Result<bool, LexError> {
        let checkpoint = self.cursor;

        if self.cursor.current() == b'0' && matches!(self.cursor.peek(), b'x' | b'X') {
            self.cursor.advance_n(2);
            let digits_start = self.cursor.pos();
            self.cursor.eat_while(|b| b.is_ascii_hexdigit());
            if self.cursor.pos() == digits_start {
                self.cursor = checkpoint;
                return Ok(false);
            }
            if matches!(self.cursor.current(), b'p' | b'P') {
                self.hex_exponent(start)?;
            }
            return Ok(true);
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        let mut digits = self.cursor.pos() - start;
        if self.cursor.current() == b'.' && self.cursor.peek() != b'.' {
            self.cursor.advance();
            let fraction_start = self.cursor.pos();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            digits += self.cursor.pos() - fraction_start;
        }
        if digits == 0 {
            self.cursor = checkpoint;
            return Ok(false);
        }
        Ok(true)
    }

    /// `p`/`P`, optional sign, at least one decimal digit.
    fn hex_exponent(&mut self, start: u32) -> Result<(), LexError> {
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        let digits_start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.pos() > digits_start {
            return Ok(());
        }
        Err(if self.cursor.is_eof() {
            LexError::unexpected_end_of_input("hexadecimal exponent", self.line, start)
        } else {
            LexError::invalid_numeric_literal(self.line, start)
        })
    }
}
