use argtok_parser::{
    TokenKind, is_abbreviation, is_option, split_equals, strip_quote_pair, trim_dashes, trim_quotes,
};

use crate::token::ArgumentToken;

impl<'arg> ArgumentToken<'arg> {
    /**
    Classify and parse a single raw token. The first rule that matches wins:

    1. Anything starting with `-` is an option. If it contains an `=`, it's
       an [`EqualSeparatedOption`][TokenKind::EqualSeparatedOption]: the name
       is everything before the first `=` (leading dashes removed) and the
       value is everything after it, with surrounding quotes removed.
       Otherwise it's a plain [`Option`][TokenKind::Option] with no value.
    2. Anything wrapped in a matching pair of quotes is a
       [`Value`][TokenKind::Value], with one layer of quotes removed.
    3. Everything else is a [`Command`][TokenKind::Command], kept verbatim.

    Parsing never fails. Degenerate input still produces a well-formed token:
    `--` is an option with an empty name, and the empty string is an empty
    command.
    */
    #[must_use]
    pub fn parse(raw: &'arg str) -> Self {
        let token = if is_option(raw) {
            let abbreviated = is_abbreviation(raw);

            match split_equals(raw) {
                Some((name, value)) => Self {
                    raw,
                    kind: TokenKind::EqualSeparatedOption,
                    name: Some(trim_dashes(name)),
                    value: Some(trim_quotes(value)),
                    abbreviated,
                    position: None,
                },
                None => Self {
                    raw,
                    kind: TokenKind::Option,
                    name: Some(trim_dashes(raw)),
                    value: None,
                    abbreviated,
                    position: None,
                },
            }
        } else {
            let (kind, value) = match strip_quote_pair(raw) {
                Some(value) => (TokenKind::Value, value),
                None => (TokenKind::Command, raw),
            };

            Self {
                raw,
                kind,
                name: None,
                value: Some(value),
                abbreviated: false,
                position: None,
            }
        };

        tracing::trace!(raw, kind = %token.kind, "parsed argument token");
        token
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
