/*!
Classify, parse, and rebuild single command-line argument tokens.

`argtok` is the primitive that sits underneath a command-line parser: given
one raw token, it decides whether that token is an option (`--verbose`,
`-v`), an option with an attached value (`--port=8080`), a quoted literal
(`'hello'`), or a bare command word (`install`), and pulls out the name and
value. It can also go the other way, turning an [`ArgumentToken`] back into
text, which is handy for help output or for re-executing a command.

```
use argtok::{TokenKind, parse};

let token = parse("--port=8080");
assert_eq!(token.kind(), TokenKind::EqualSeparatedOption);
assert_eq!(token.name(), Some("port"));
assert_eq!(token.value(), Some("8080"));
assert_eq!(token.build().unwrap(), "--port=8080");
```

Splitting a full command line into tokens, validating names, and binding
options to values all happen elsewhere. The low-level predicates live in
[`argtok_parser`] and are re-exported here.
*/

#![no_std]

extern crate alloc;

pub mod abbreviation;
mod build;
pub mod error;
mod parse;
pub mod token;

use alloc::string::String;

pub use abbreviation::{split_abbreviation_cluster, to_abbreviation, to_option};
pub use argtok_parser::{
    TokenKind, classify, is_abbreviation, is_abbreviation_cluster, is_command, is_option, is_value,
};
pub use build::Rendered;
pub use error::Error;
pub use token::{ArgumentToken, kind_from_code, sort_by_position};

/// Parse a single raw token. This never fails; see [`ArgumentToken::parse`].
#[inline]
#[must_use]
pub fn parse(raw: &str) -> ArgumentToken<'_> {
    ArgumentToken::parse(raw)
}

/// Build the canonical text of a token. See [`ArgumentToken::build`].
#[inline]
pub fn build(token: &ArgumentToken<'_>) -> Result<String, Error> {
    token.build()
}
