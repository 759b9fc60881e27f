//! Property-based tests for the Fusion lexer.
//!
//! Random sources are drawn from an alphabet dense in operator, quote,
//! digit, and line-break characters so that every dispatch rule, and most
//! error paths, get exercised. The properties:
//! 1. Successful scans end with exactly one empty `End` token.
//! 2. Blank-only input is one `White` token plus `End`.
//! 3. Token spans tile the source; only line breaks fall between them.
//! 4. Every token's line is one more than the newlines before it.
//! 5. Errors point at a real position in the source.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use fusion_lexer::{tokenize, tokenize_with, LexerConfig, Token, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// Characters that drive the interesting scanner paths.
const DENSE: &str = "[a-zA-Z0-9_ .\"'\\\\&|<>=!\n\r\t(),+xXpPé→-]{0,48}";

fn line_at(source: &str, pos: u32) -> u32 {
    let newlines = source[..pos as usize].matches('\n').count();
    u32::try_from(newlines).expect("test source fits in u32") + 1
}

fn assert_tiles(source: &str, tokens: &[Token]) {
    let mut covered = 0u32;
    for token in tokens {
        let (start, end) = (token.span.start, token.span.end);
        let gap = &source[covered as usize..start as usize];
        assert!(
            gap.bytes().all(|b| b == b'\n' || b == b'\r'),
            "unexpected gap {gap:?} before {token:?} in {source:?}"
        );
        let expected = source[start as usize..end as usize].replace('\r', "");
        assert_eq!(token.text, expected, "text/span mismatch in {source:?}");
        covered = end;
    }
    assert_eq!(covered as usize, source.len());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn successful_scan_ends_with_one_end(source in DENSE) {
        if let Ok(tokens) = tokenize(&source) {
            let last = tokens.last().expect("never empty");
            prop_assert_eq!(last.kind, TokenKind::End);
            prop_assert_eq!(last.text.as_str(), "");
            let ends = tokens.iter().filter(|t| t.kind == TokenKind::End).count();
            prop_assert_eq!(ends, 1);
        }
    }

    #[test]
    fn blank_only_input_is_one_white(source in "[ \t\x0B\x0C]{1,32}") {
        let tokens = tokenize(&source).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::White);
        prop_assert_eq!(tokens[0].text.as_str(), source.as_str());
        prop_assert_eq!(tokens[1].kind, TokenKind::End);
    }

    #[test]
    fn spans_tile_the_source(source in DENSE) {
        if let Ok(tokens) = tokenize(&source) {
            assert_tiles(&source, &tokens);
        }
    }

    #[test]
    fn lines_follow_newlines(source in DENSE) {
        if let Ok(tokens) = tokenize(&source) {
            for token in &tokens {
                prop_assert_eq!(token.line, line_at(&source, token.span.start), "{:?}", token);
            }
        }
    }

    #[test]
    fn errors_are_located_in_source(source in DENSE) {
        if let Err(err) = tokenize(&source) {
            prop_assert!((err.pos as usize) < source.len());
            prop_assert_eq!(err.line, line_at(&source, err.pos));
        }
    }

    #[test]
    fn dropping_whitespace_only_removes_white(source in DENSE) {
        let with = tokenize(&source);
        let without = tokenize_with(&source, &LexerConfig::without_whitespace());
        match (with, without) {
            (Ok(with), Ok(without)) => {
                let kept: Vec<_> = with.into_iter().filter(|t| t.kind != TokenKind::White).collect();
                prop_assert_eq!(kept, without);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "configs disagree: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn arbitrary_text_never_panics(source in any::<String>()) {
        let _ = tokenize(&source);
    }
}

#[test]
fn decimal_and_hex_literals_keep_source_text() {
    let source = "x = .5 + 5. + 0x1Ap3";
    let nums: Vec<_> = tokenize(source)
        .unwrap()
        .into_iter()
        .filter(|t| t.kind == TokenKind::Num)
        .map(|t| t.text)
        .collect();
    assert_eq!(nums, vec![".5", "5.", "0x1Ap3"]);
}
