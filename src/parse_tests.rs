use super::*;

#[yare::parameterized(
    long         = { "--verbose",    Some("verbose"), false },
    short        = { "-v",           Some("v"),       true },
    cluster      = { "-abc",         Some("abc"),     true },
    triple_dash  = { "---x",         Some("x"),       false },
    trailing     = { "--dry-run-",   Some("dry-run-"), false },
    bare_dashes  = { "--",           Some(""),        false },
    single_dash  = { "-",            Some(""),        true },
)]
fn plain_option(raw: &str, name: Option<&str>, abbreviated: bool) {
    let token = ArgumentToken::parse(raw);

    assert_eq!(token.kind(), TokenKind::Option);
    assert_eq!(token.name(), name);
    assert_eq!(token.value(), None);
    assert_eq!(token.is_abbreviated(), abbreviated);
    assert_eq!(token.raw(), raw);
    assert_eq!(token.position(), None);
}

#[yare::parameterized(
    long          = { "--port=8080",       "port",  "8080",  false },
    short         = { "-p=8080",           "p",     "8080",  true },
    single_quoted = { "--name='Jo Bo'",    "name",  "Jo Bo", false },
    double_quoted = { "--name=\"x\"",      "name",  "x",     false },
    all_quotes    = { "--name='\"x\"'",    "name",  "x",     false },
    empty_value   = { "--name=",           "name",  "",      false },
    zero          = { "--level=0",         "level", "0",     false },
    first_equals  = { "--define=a=b",      "define", "a=b",  false },
    empty_name    = { "--=x",              "",      "x",     false },
)]
fn equal_separated_option(raw: &str, name: &str, value: &str, abbreviated: bool) {
    let token = ArgumentToken::parse(raw);

    assert_eq!(token.kind(), TokenKind::EqualSeparatedOption);
    assert_eq!(token.name(), Some(name));
    assert_eq!(token.value(), Some(value));
    assert_eq!(token.is_abbreviated(), abbreviated);
}

#[yare::parameterized(
    single = { "'hello'",      "hello" },
    double = { "\"hello\"",    "hello" },
    empty  = { "''",           "" },
    nested = { "'\"hi\"'",     "\"hi\"" },
    spaces = { "' a b '",      " a b " },
    dashes = { "'--not-opt'",  "--not-opt" },
)]
fn quoted_value(raw: &str, value: &str) {
    let token = ArgumentToken::parse(raw);

    assert_eq!(token.kind(), TokenKind::Value);
    assert_eq!(token.name(), None);
    assert_eq!(token.value(), Some(value));
    assert!(!token.is_abbreviated());
}

#[yare::parameterized(
    word       = { "install" },
    empty      = { "" },
    equals     = { "key=value" },
    lone_quote = { "'" },
    mismatched = { "'oops\"" },
    zero       = { "0" },
)]
fn command_is_verbatim(raw: &str) {
    let token = ArgumentToken::parse(raw);

    assert_eq!(token.kind(), TokenKind::Command);
    assert_eq!(token.name(), None);
    assert_eq!(token.value(), Some(raw));
    assert!(!token.is_abbreviated());
}

#[test]
fn kind_matches_classifier() {
    for raw in ["--a", "-a=b", "'x'", "x", "", "--"] {
        assert_eq!(
            ArgumentToken::parse(raw).kind(),
            argtok_parser::classify(raw)
        );
    }
}

#[test]
fn parsed_parts_borrow_from_raw() {
    let raw = "--port=8080";
    let token = ArgumentToken::parse(raw);

    let name = token.name().unwrap_or_default();
    assert!(raw.as_bytes().as_ptr_range().contains(&name.as_ptr()));
}
