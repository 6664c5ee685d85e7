mod price;
mod range;
mod sources;
mod summary;

use coindata_core::{factory, AssetId, FeedConfig, FeedLocation, Source, SourceFactory};
use log::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output;

pub fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Price(args) => {
            let source = open_source(cli, &args.asset)?;
            let report = price::run(args, source.as_ref());
            output::render(&report, cli.format, cli.pretty)
        }
        Command::Range(args) => {
            let source = open_source(cli, &args.asset)?;
            let report = range::run(args, source.as_ref());
            output::render(&report, cli.format, cli.pretty)
        }
        Command::Summary(args) => {
            let source = open_source(cli, &args.asset)?;
            let report = summary::run(args, source.as_ref());
            output::render(&report, cli.format, cli.pretty)
        }
        Command::Sources => output::render(&sources::run(), cli.format, cli.pretty),
    }
}

/// Build the named source, applying the global feed flags to its feed.
fn open_source(cli: &Cli, name: &str) -> Result<Box<dyn Source>, CliError> {
    let asset = name.parse::<AssetId>()?;
    let feed = feed_for(cli, asset);

    debug!("building {asset} source from {}", feed.location);
    let source = SourceFactory::default().with_feed(asset, feed).build(asset)?;
    Ok(source)
}

/// The asset's default feed with `--timeout-ms`, `--feed-url` and `--feed-file` applied.
fn feed_for(cli: &Cli, asset: AssetId) -> FeedConfig {
    let mut feed = factory::default_feed(asset).with_timeout_ms(cli.timeout_ms);
    if let Some(url) = &cli.feed_url {
        feed.location = FeedLocation::Remote(url.clone());
    }
    if let Some(path) = &cli.feed_file {
        feed.location = FeedLocation::File(path.clone());
    }
    feed
}

/// Upper-case ticker used in text output.
fn ticker(asset: AssetId) -> String {
    asset.as_str().to_ascii_uppercase()
}
