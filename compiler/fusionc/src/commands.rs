//! Command handlers for the Fusion CLI.
//!
//! Each submodule implements one CLI command. Shared utilities like
//! `read_file` live here in the module root.

mod lex;

pub use lex::{lex_file, lex_source, render_tokens, LexOptions};

/// Read a source file, mapping I/O failures to a user-facing message.
pub fn read_source(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Read a source file, exiting with status 1 if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match read_source(path) {
        Ok(content) => content,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    }
}
