//! Log output on stderr
//!
//! Catalog text owns stdout, so every log line goes to stderr.

use std::io::IsTerminal;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Prefixes each event with a level symbol, colored only when `ansi` is set
pub struct CatalogFormatter {
    pub ansi: bool,
}

impl<S, N> FormatEvent<S, N> for CatalogFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *event.metadata().level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };

        if self.ansi {
            write!(writer, "{} ", color_func(symbol.into()))?;
        } else {
            write!(writer, "{} ", symbol)?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Pick the log filter: RUST_LOG, then --verbose, then the configured level
pub fn filter_directive(env: Option<String>, verbose: bool, configured: &str) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Build the stderr subscriber; escape codes only when `ansi` is set
pub fn build_subscriber<W>(filter: EnvFilter, ansi: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .event_format(CatalogFormatter { ansi })
        .finish()
}

pub fn init_logging(verbose: bool, configured: &str) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), verbose, configured);
    let (filter, rejected) = match EnvFilter::try_new(&directive) {
        Ok(filter) => (filter, false),
        Err(_) => (EnvFilter::new("warn"), true),
    };

    let ansi = std::io::stderr().is_terminal();
    let installed =
        tracing::subscriber::set_global_default(build_subscriber(filter, ansi, std::io::stderr));

    if installed.is_ok() && rejected {
        tracing::warn!(directive = %directive, "invalid log filter, using warn");
    }
}
