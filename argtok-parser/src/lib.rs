#![no_std]

/*!
Low-level classification of single command-line tokens. Takes care of the
distinctions between options, quoted values, and bare command words, and
provides the slicing primitives used to pull names and values out of them.
Nothing here allocates. Usually this is too low level to use directly; the
`argtok` crate wraps it in a borrowed `ArgumentToken`.

Tokens are assumed to already be split by the caller: `--port=8080` is one
token, `--port 8080` is two.
*/

mod slice;

use core::fmt;

pub use slice::{
    cluster_chars, split_equals, strip_quote_pair, trim_dashes, trim_name, trim_quotes,
};

/// The syntactic category of a single command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An option or flag without an attached value, such as `--verbose` or
    /// `-v`.
    Option,

    /// An option with its value attached by `=`, such as `--port=8080`.
    EqualSeparatedOption,

    /// A quoted literal, such as `'hello'` or `"hello"`.
    Value,

    /// A bare word that is neither an option nor a quoted value.
    Command,
}

impl TokenKind {
    /// Every kind, in code order.
    pub const ALL: [TokenKind; 4] = [
        TokenKind::Option,
        TokenKind::EqualSeparatedOption,
        TokenKind::Value,
        TokenKind::Command,
    ];

    /// The stable numeric code for this kind.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            TokenKind::Option => 100,
            TokenKind::EqualSeparatedOption => 101,
            TokenKind::Value => 200,
            TokenKind::Command => 300,
        }
    }

    /// Look up a kind by its numeric code. Returns [`None`] for codes that
    /// don't name one of the four kinds.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            100 => Some(TokenKind::Option),
            101 => Some(TokenKind::EqualSeparatedOption),
            200 => Some(TokenKind::Value),
            300 => Some(TokenKind::Command),
            _ => None,
        }
    }

    /// True for the two kinds that carry a name.
    #[inline]
    #[must_use]
    pub const fn is_option(self) -> bool {
        matches!(self, TokenKind::Option | TokenKind::EqualSeparatedOption)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Option => "option",
            TokenKind::EqualSeparatedOption => "equal-separated option",
            TokenKind::Value => "value",
            TokenKind::Command => "command",
        })
    }
}

/// True if the token starts with a dash. This covers both `-x` and `--long`.
#[inline]
#[must_use]
pub fn is_option(token: &str) -> bool {
    token.starts_with('-')
}

/// True if the token is a single-dash option, such as `-v` or `-abc`.
#[inline]
#[must_use]
pub fn is_abbreviation(token: &str) -> bool {
    token.starts_with('-') && !token.starts_with("--")
}

/// True if the token is a single-dash option holding more than one
/// character, such as `-abc`. These should usually be expanded with
/// [`cluster_chars`] before use.
#[inline]
#[must_use]
pub fn is_abbreviation_cluster(token: &str) -> bool {
    is_abbreviation(token) && token.chars().nth(2).is_some()
}

/// True if the token is wrapped in a matching pair of single or double
/// quotes. A lone quote character is not a value.
#[inline]
#[must_use]
pub fn is_value(token: &str) -> bool {
    strip_quote_pair(token).is_some()
}

/// True if the token is a bare word: neither a quoted value nor an option.
#[inline]
#[must_use]
pub fn is_command(token: &str) -> bool {
    !is_value(token) && !is_option(token)
}

/// Determine the kind of a token. Every string has exactly one kind;
/// [`TokenKind::Command`] is the catch-all.
#[must_use]
pub fn classify(token: &str) -> TokenKind {
    if is_option(token) {
        match split_equals(token) {
            Some(_) => TokenKind::EqualSeparatedOption,
            None => TokenKind::Option,
        }
    } else if is_value(token) {
        TokenKind::Value
    } else {
        TokenKind::Command
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
