use anyhow::Context;
use listing_resolver::{resolve_stream, Resolver, ResolverConfig};
use std::io;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the reports
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = ResolverConfig::from_env().context("loading configuration")?;
    let resolver = Resolver::new(config);
    tracing::info!(
        empty_events = %resolver.config().empty_events,
        "Resolving listings from stdin"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    resolve_stream(stdin.lock(), io::BufWriter::new(stdout.lock()), &resolver)
        .context("resolving listing stream")?;

    Ok(())
}
