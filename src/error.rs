use alloc::string::String;

use argtok_parser::TokenKind;

/// Everything that can go wrong in `argtok`. Classifying and parsing never
/// fail; only building text and converting names can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A numeric kind code didn't name any [`TokenKind`].
    #[error("{code} is not a valid token kind code")]
    InvalidTokenKind { code: u16 },

    /// Nothing was left of a name after trimming quotes, dashes and
    /// whitespace, so there's no character to abbreviate.
    #[error("{input:?} is empty after trimming quotes and dashes")]
    EmptyName { input: String },

    /// An option token was built without a name.
    #[error("can't build {kind} token without a name")]
    MissingName { kind: TokenKind },
}
