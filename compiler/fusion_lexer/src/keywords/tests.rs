use super::*;

// === Table shape ===

#[test]
fn table_codes_follow_index() {
    for (index, &(spelling, kind)) in RESERVED.iter().enumerate() {
        let expected = FIRST_RESERVED + u16::try_from(index).unwrap_or(u16::MAX);
        assert_eq!(kind.code(), expected, "code mismatch for {spelling:?}");
    }
}

#[test]
fn table_is_the_spelling_inverse() {
    for &(spelling, kind) in &RESERVED {
        assert_eq!(kind.spelling(), Some(spelling));
    }
}

#[test]
fn first_reserved_is_above_byte_range() {
    assert!(FIRST_RESERVED > u16::from(u8::MAX));
    assert_eq!(TokenKind::Else.code(), 257);
}

#[test]
fn leading_entries_are_exactly_the_keywords() {
    for (index, &(spelling, kind)) in RESERVED.iter().enumerate() {
        assert_eq!(
            kind.is_keyword(),
            index < KEYWORD_COUNT,
            "keyword split wrong at {spelling:?}"
        );
    }
}

#[test]
fn spellings_are_unique() {
    for (i, (a, _)) in RESERVED.iter().enumerate() {
        for (b, _) in &RESERVED[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// === Lookup ===

#[test]
fn every_keyword_resolves() {
    for &(spelling, kind) in &RESERVED[..KEYWORD_COUNT] {
        assert_eq!(lookup_keyword(spelling), Some(kind), "for {spelling:?}");
    }
}

#[test]
fn control_flow_keywords() {
    assert_eq!(lookup_keyword("if"), Some(TokenKind::If));
    assert_eq!(lookup_keyword("else"), Some(TokenKind::Else));
    assert_eq!(lookup_keyword("while"), Some(TokenKind::While));
    assert_eq!(lookup_keyword("for"), Some(TokenKind::For));
    assert_eq!(lookup_keyword("in"), Some(TokenKind::In));
}

#[test]
fn value_keywords() {
    assert_eq!(lookup_keyword("true"), Some(TokenKind::True));
    assert_eq!(lookup_keyword("false"), Some(TokenKind::False));
    assert_eq!(lookup_keyword("nil"), Some(TokenKind::Nil));
}

#[test]
fn object_and_coroutine_keywords() {
    assert_eq!(lookup_keyword("new"), Some(TokenKind::New));
    assert_eq!(lookup_keyword("extends"), Some(TokenKind::Extends));
    assert_eq!(lookup_keyword("async"), Some(TokenKind::Async));
    assert_eq!(lookup_keyword("yield"), Some(TokenKind::Yield));
}

#[test]
fn operators_never_match_as_keywords() {
    for &(spelling, _) in &RESERVED[KEYWORD_COUNT..] {
        assert_eq!(lookup_keyword(spelling), None, "for {spelling:?}");
    }
}

#[test]
fn match_is_exact() {
    assert_eq!(lookup_keyword("while1"), None);
    assert_eq!(lookup_keyword("whil"), None);
    assert_eq!(lookup_keyword("While"), None);
    assert_eq!(lookup_keyword("IF"), None);
    assert_eq!(lookup_keyword("_if"), None);
    assert_eq!(lookup_keyword("extendss"), None);
}

#[test]
fn length_guard() {
    assert_eq!(lookup_keyword(""), None);
    assert_eq!(lookup_keyword("i"), None);
    assert_eq!(lookup_keyword("extended"), None);
}
