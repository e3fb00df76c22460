use alloc::vec::Vec;

use super::*;

#[test]
fn constructors_never_carry_raw_text_or_position() {
    for token in [
        ArgumentToken::option("verbose", false),
        ArgumentToken::option_with_value("port", "80", false),
        ArgumentToken::equal_separated_option("port", "80", true),
        ArgumentToken::quoted("hello"),
        ArgumentToken::command("install"),
    ] {
        assert_eq!(token.raw(), "");
        assert_eq!(token.position(), None);
    }
}

#[test]
fn only_option_constructors_have_names() {
    let option = ArgumentToken::option("v", true);
    assert_eq!(option.kind(), TokenKind::Option);
    assert_eq!(option.name(), Some("v"));
    assert_eq!(option.value(), None);
    assert!(option.is_abbreviated());
    assert!(option.is_option_kind());

    let equals = ArgumentToken::equal_separated_option("port", "8080", false);
    assert_eq!(equals.kind(), TokenKind::EqualSeparatedOption);
    assert_eq!(equals.value(), Some("8080"));

    let quoted = ArgumentToken::quoted("0");
    assert_eq!(quoted.name(), None);
    assert_eq!(quoted.value(), Some("0"));
    assert!(!quoted.is_abbreviated());
    assert!(!quoted.is_option_kind());

    let command = ArgumentToken::command("");
    assert_eq!(command.kind(), TokenKind::Command);
    assert_eq!(command.value(), Some(""));
}

#[test]
fn with_position_changes_nothing_else() {
    let token = ArgumentToken::parse("--port=8080");
    let positioned = token.with_position(Some(3));

    assert_eq!(positioned.position(), Some(3));
    assert_eq!(positioned.with_position(None), token);
}

#[test]
fn sort_puts_unpositioned_tokens_last_in_order() {
    let mut tokens = [
        ArgumentToken::command("c"),
        ArgumentToken::command("b").with_position(Some(2)),
        ArgumentToken::command("d"),
        ArgumentToken::command("a").with_position(Some(0)),
    ];

    sort_by_position(&mut tokens);

    let order: Vec<_> = tokens.iter().filter_map(|token| token.value()).collect();
    assert_eq!(order, ["a", "b", "c", "d"]);
}

#[test]
fn kind_codes() {
    assert_eq!(kind_from_code(100), Ok(TokenKind::Option));
    assert_eq!(kind_from_code(101), Ok(TokenKind::EqualSeparatedOption));
    assert_eq!(kind_from_code(200), Ok(TokenKind::Value));
    assert_eq!(kind_from_code(300), Ok(TokenKind::Command));
    assert_eq!(
        kind_from_code(400),
        Err(Error::InvalidTokenKind { code: 400 })
    );
}
