use std::{
    fmt::Display,
    io::{self, Write as _},
};

use argtok::{
    ArgumentToken, is_abbreviation_cluster, split_abbreviation_cluster, to_abbreviation, to_option,
};
use indent_write::io::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::config::Config;

/*
Each token gets a section like this:

#2 "-abc":
  kind:        option (100)
  name:        "abc"
  value:       (absent)
  abbreviated: true
  rebuilt:     -abc
  expands to:  -a -b -c
  long form:   --abc
  short form:  -a
 */
pub fn print_report<'a>(
    out: &mut impl io::Write,
    config: &Config,
    tokens: impl IntoIterator<Item = ArgumentToken<'a>>,
) -> io::Result<()> {
    tokens
        .into_iter()
        .try_for_each(|token| print_token(out, config, &token))
}

fn optional(field: Option<&str>) -> impl Display {
    lazy_format!(match (field) {
        Some(field) => "{field:?}",
        None => "(absent)",
    })
}

fn print_token(
    out: &mut (impl io::Write + ?Sized),
    config: &Config,
    token: &ArgumentToken<'_>,
) -> io::Result<()> {
    let position = lazy_format!(match (token.position()) {
        Some(position) => "#{position}",
        None => "#?",
    });

    let header = lazy_format!("{position} {raw:?}", raw = token.raw());

    section(out, header, |mut out| {
        let kind = token.kind();
        writeln!(out, "kind:        {kind} ({code})", code = kind.code())?;
        writeln!(out, "name:        {}", optional(token.name()))?;
        writeln!(out, "value:       {}", optional(token.value()))?;
        writeln!(out, "abbreviated: {}", token.is_abbreviated())?;

        match token.build() {
            Ok(built) => writeln!(out, "rebuilt:     {built}")?,
            Err(err) => writeln!(out, "rebuilt:     <{err}>")?,
        }

        if config.expand_clusters && is_abbreviation_cluster(token.raw()) {
            let flags = split_abbreviation_cluster(token.raw(), true);
            writeln!(out, "expands to:  {}", flags.iter().join_with(' '))?;
        }

        if let Some(name) = token.name() {
            writeln!(out, "long form:   {}", to_option(name))?;

            match to_abbreviation(name) {
                Ok(short) => writeln!(out, "short form:  {short}")?,
                Err(err) => writeln!(out, "short form:  <{err}>")?,
            }
        }

        Ok(())
    })
}

/// Write the `header`, then an indented `body`.
fn section<O: io::Write + ?Sized, T>(
    out: &mut O,
    header: impl Display,
    body: impl FnOnce(IndentWriter<&mut O>) -> io::Result<T>,
) -> io::Result<T> {
    writeln!(out, "{header}:")?;
    body(IndentWriter::new("  ", out))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
