use std::ffi::OsString;

use argtok::{ArgumentToken, TokenKind};

use crate::error::ConfigError;

/// Options for the demo itself, read from the front of the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Raise the default log filter so that every parsed and built token is
    /// logged
    pub verbose: bool,

    /// Show the individual flags of clusters like `-abc`
    pub expand_clusters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            expand_clusters: true,
        }
    }
}

impl Config {
    /// Read demo flags from the front of `args`, using `argtok` itself to
    /// recognize them. Flags end at the first non-option or at `--`;
    /// everything after that is returned as the arguments to inspect.
    pub fn from_args(args: &[String]) -> Result<(Self, &[String]), ConfigError> {
        let mut config = Self::default();

        for (index, raw) in args.iter().enumerate() {
            let token = ArgumentToken::parse(raw);

            match (token.kind(), token.name(), token.is_abbreviated()) {
                (TokenKind::Option, Some(""), false) => return Ok((config, &args[index + 1..])),
                (TokenKind::Option, Some("verbose"), false)
                | (TokenKind::Option, Some("v"), true) => config.verbose = true,
                (TokenKind::Option, Some("no-expand"), false) => config.expand_clusters = false,
                (TokenKind::Option | TokenKind::EqualSeparatedOption, ..) => {
                    return Err(ConfigError::UnknownFlag {
                        flag: token.build()?,
                    });
                }
                (TokenKind::Value | TokenKind::Command, ..) => return Ok((config, &args[index..])),
            }
        }

        Ok((config, &[]))
    }
}

/// Convert raw OS arguments to strings, rejecting anything that isn't UTF-8.
pub fn unicode_args(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>, ConfigError> {
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.into_string().map_err(|arg| ConfigError::NotUnicode {
                index,
                lossy: arg.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
