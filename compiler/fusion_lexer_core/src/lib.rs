//! Low-level scanning primitives for the Fusion lexer.
//!
//! [`SourceBuffer`] copies source text into a zero-padded buffer whose byte
//! after the content is always `0x00`. [`Cursor`] reads that buffer one byte at
//! a time: looking past the end of the source yields the sentinel instead of
//! panicking, so every lookahead in the lexer is a plain byte comparison.

mod cursor;
mod source_buffer;

pub use cursor::{is_blank, Cursor};
pub use source_buffer::SourceBuffer;
