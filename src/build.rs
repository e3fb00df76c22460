use core::fmt::{self, Display};

use alloc::string::{String, ToString};

use argtok_parser::TokenKind;

use crate::{error::Error, token::ArgumentToken};

/// The canonical text of an [`ArgumentToken`], ready to be written with
/// [`Display`]. Created by [`ArgumentToken::render`].
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    kind: TokenKind,
    prefix: &'static str,
    name: &'a str,
    value: Option<&'a str>,
}

impl Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            kind,
            prefix,
            name,
            value,
        } = *self;

        // Empty values are dropped along with their separator
        let value = value.filter(|value| !value.is_empty());

        match (kind, value) {
            (TokenKind::EqualSeparatedOption, Some(value)) => write!(f, "{prefix}{name}={value}"),
            (TokenKind::Option, Some(value)) => write!(f, "{prefix}{name} {value}"),
            (TokenKind::EqualSeparatedOption | TokenKind::Option, None) => {
                write!(f, "{prefix}{name}")
            }
            (TokenKind::Value, value) => write!(f, "'{}'", value.unwrap_or_default()),
            (TokenKind::Command, value) => f.write_str(value.unwrap_or_default()),
        }
    }
}

impl<'arg> ArgumentToken<'arg> {
    /**
    Prepare the canonical text of this token without allocating.

    - Options get a `-` prefix if abbreviated, `--` otherwise. An
      [`EqualSeparatedOption`][TokenKind::EqualSeparatedOption] attaches its
      value with `=`, an [`Option`][TokenKind::Option] with a space. Absent
      and empty values are both omitted.
    - [`Value`][TokenKind::Value] tokens are always wrapped in single quotes,
      whatever quotes they were parsed with.
    - [`Command`][TokenKind::Command] tokens are written verbatim.

    This is a normalization rather than an exact inverse of
    [`parse`][ArgumentToken::parse]: `"hello"` rebuilds as `'hello'`, and
    `--a=''` rebuilds as `--a`.

    Fails with [`Error::MissingName`] for an option token without a name.
    */
    pub fn render(&self) -> Result<Rendered<'arg>, Error> {
        let name = match (self.kind.is_option(), self.name) {
            (true, Some(name)) => name,
            (true, None) => {
                tracing::debug!(kind = %self.kind, "refusing to build a nameless option");
                return Err(Error::MissingName { kind: self.kind });
            }
            (false, _) => "",
        };

        Ok(Rendered {
            kind: self.kind,
            prefix: if self.abbreviated { "-" } else { "--" },
            name,
            value: self.value,
        })
    }

    /// Build the canonical text of this token. See
    /// [`render`][ArgumentToken::render] for the rules.
    pub fn build(&self) -> Result<String, Error> {
        let built = self.render()?.to_string();
        tracing::trace!(
            raw = self.raw,
            built = built.as_str(),
            "built argument token"
        );
        Ok(built)
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
