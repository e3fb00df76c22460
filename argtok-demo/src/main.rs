/*!
Classify each command-line argument with `argtok` and print what it found.

```text
argtok-demo [--verbose|-v] [--no-expand] [--] ARG...
```

Demo flags are read from the front of the command line; everything from the
first non-option (or everything after `--`) is inspected. Set `RUST_LOG` to
override the log filter.
*/

mod config;
mod error;
mod report;

use std::io::{self, Write as _};

use anyhow::Context;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::config::{Config, unicode_args};

const VERBOSE_FILTER: &str = "argtok=trace,argtok_demo=debug";

/// Install the subscriber before any flags are read. If `RUST_LOG` is set it
/// wins outright; otherwise the returned handle lets `--verbose` raise the
/// filter once the flags are known.
fn init_tracing() -> Option<reload::Handle<EnvFilter, Registry>> {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new("warn"), false),
    };

    let (filter, handle) = reload::Layer::new(filter);

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();

    (!from_env).then_some(handle)
}

fn main() -> anyhow::Result<()> {
    let log_filter = init_tracing();

    let args = unicode_args(std::env::args_os().skip(1))?;
    let (config, operands) = Config::from_args(&args).context("invalid demo flags")?;

    if config.verbose
        && let Some(handle) = log_filter
    {
        handle
            .reload(EnvFilter::new(VERBOSE_FILTER))
            .context("failed to raise the log filter")?;
    }

    tracing::debug!(?config, count = operands.len(), "inspecting arguments");

    let tokens = operands
        .iter()
        .enumerate()
        .map(|(position, raw)| argtok::parse(raw).with_position(Some(position)));

    let mut out = io::stdout().lock();
    report::print_report(&mut out, &config, tokens).context("failed to write report")?;
    out.flush().context("failed to flush report")?;

    Ok(())
}
