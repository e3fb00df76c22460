/*!
Conversions between option names and their `--long` / `-s` textual forms,
and expansion of abbreviation clusters like `-abc`.
*/

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

use argtok_parser::{cluster_chars, trim_name};

use crate::error::Error;

/// Split an abbreviation cluster such as `-abc` into its individual flags,
/// left to right. With `with_prefix`, each flag keeps a dash (`-a`, `-b`,
/// `-c`); otherwise only the characters are returned.
#[must_use]
pub fn split_abbreviation_cluster(token: &str, with_prefix: bool) -> Vec<String> {
    cluster_chars(token)
        .map(|flag| match with_prefix {
            true => format!("-{flag}"),
            false => flag.to_string(),
        })
        .collect()
}

/// Turn a name into a long option, so `'name'` or `-name` becomes `--name`.
/// Surrounding whitespace, quotes, and dashes are removed first.
#[must_use]
pub fn to_option(name: &str) -> String {
    format!("--{}", trim_name(name))
}

/// Turn a name into a short option made of its first character, so `name`
/// becomes `-n`. Surrounding whitespace, quotes, and dashes are removed
/// first; if nothing is left, this fails with [`Error::EmptyName`].
pub fn to_abbreviation(name: &str) -> Result<String, Error> {
    match trim_name(name).chars().next() {
        Some(first) => Ok(format!("-{first}")),
        None => {
            tracing::debug!(name, "no character left to abbreviate");
            Err(Error::EmptyName {
                input: String::from(name),
            })
        }
    }
}

#[cfg(test)]
#[path = "abbreviation_tests.rs"]
mod tests;
