/*!
The [`ArgumentToken`] type, along with its constructors and accessors.
*/

use argtok_parser::TokenKind;

use crate::error::Error;

/**
A single classified command-line token.

Parsed tokens borrow from the raw input: for `--port=8080`, the `name` is the
`port` slice of the original string and the `value` is the `8080` slice.
Nothing is copied until the token is [built][ArgumentToken::build] back into
text.

Tokens are plain values. The only field a caller is expected to change after
construction is the [position][ArgumentToken::with_position], which exists so
that a sequence of tokens can be reordered.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgumentToken<'arg> {
    pub(crate) raw: &'arg str,
    pub(crate) kind: TokenKind,
    pub(crate) name: Option<&'arg str>,
    pub(crate) value: Option<&'arg str>,
    pub(crate) abbreviated: bool,
    pub(crate) position: Option<usize>,
}

impl<'arg> ArgumentToken<'arg> {
    #[inline]
    const fn synthetic(
        kind: TokenKind,
        name: Option<&'arg str>,
        value: Option<&'arg str>,
        abbreviated: bool,
    ) -> Self {
        Self {
            raw: "",
            kind,
            name,
            value,
            abbreviated,
            position: None,
        }
    }

    /// An option with no value, such as `--verbose`, or `-v` if
    /// `abbreviated` is set.
    #[inline]
    #[must_use]
    pub const fn option(name: &'arg str, abbreviated: bool) -> Self {
        Self::synthetic(TokenKind::Option, Some(name), None, abbreviated)
    }

    /// An option followed by its value as a separate word, such as
    /// `--port 8080`.
    #[inline]
    #[must_use]
    pub const fn option_with_value(name: &'arg str, value: &'arg str, abbreviated: bool) -> Self {
        Self::synthetic(TokenKind::Option, Some(name), Some(value), abbreviated)
    }

    /// An option with its value attached by `=`, such as `--port=8080`.
    #[inline]
    #[must_use]
    pub const fn equal_separated_option(
        name: &'arg str,
        value: &'arg str,
        abbreviated: bool,
    ) -> Self {
        Self::synthetic(
            TokenKind::EqualSeparatedOption,
            Some(name),
            Some(value),
            abbreviated,
        )
    }

    /// A quoted literal. The quotes are added when the token is built.
    #[inline]
    #[must_use]
    pub const fn quoted(value: &'arg str) -> Self {
        Self::synthetic(TokenKind::Value, None, Some(value), false)
    }

    /// A bare command word.
    #[inline]
    #[must_use]
    pub const fn command(command: &'arg str) -> Self {
        Self::synthetic(TokenKind::Command, None, Some(command), false)
    }

    /// The original, unmodified input. Empty for tokens that were
    /// constructed directly rather than parsed.
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> &'arg str {
        self.raw
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The option name, without its dashes. Always present for option
    /// kinds (though possibly empty, as for `--`), and always absent for
    /// values and commands.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> Option<&'arg str> {
        self.name
    }

    /// The value or payload. [`None`] is distinct from `Some("")`: `--opt=`
    /// has an empty value, `--opt` has none.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<&'arg str> {
        self.value
    }

    /// True if the option was introduced with a single dash. Always false
    /// for values and commands.
    #[inline]
    #[must_use]
    pub const fn is_abbreviated(&self) -> bool {
        self.abbreviated
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_option_kind(&self) -> bool {
        self.kind.is_option()
    }

    /// Return this token with a caller-assigned position.
    #[inline]
    #[must_use]
    pub const fn with_position(self, position: Option<usize>) -> Self {
        Self { position, ..self }
    }
}

/// Look up a [`TokenKind`] by its numeric code, failing with
/// [`Error::InvalidTokenKind`] for unknown codes.
pub fn kind_from_code(code: u16) -> Result<TokenKind, Error> {
    TokenKind::from_code(code).ok_or(Error::InvalidTokenKind { code })
}

/// Sort tokens by their caller-assigned position. Tokens without a position
/// go last, keeping their relative order.
pub fn sort_by_position(tokens: &mut [ArgumentToken<'_>]) {
    tokens.sort_by_key(|token| (token.position.is_none(), token.position));
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
