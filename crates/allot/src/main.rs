use allot::cli::Cli;
use allot::commands::Commands;
use allot::output::Output;
use anyhow::Context;
use clap::Parser;
use std::io::BufRead;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let commands = Commands::load(&cli.templates, cli.file.as_deref(), cli.escape)?;

    let requests: Vec<String> = if cli.request.is_empty() {
        let stdin = std::io::stdin();
        let mut lines = Vec::new();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read requests from stdin")?;
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
        lines
    } else {
        vec![cli.request.join(" ")]
    };

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color, cli.json);

    let mut all_matched = true;
    for request in &requests {
        let found = commands.dispatch(request);
        all_matched &= found.is_some();
        output
            .print_result(request, found.as_ref())
            .context("failed to write result")?;
    }

    std::process::exit(if all_matched { 0 } else { 1 });
}
