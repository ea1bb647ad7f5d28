use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nssh::config::{expand_home, Config};
use nssh::hostlist::ListStore;
use nssh::logging::init_tracing;
use nssh::screenrc::rewrite;

/// Regenerate the host windows of a screen config from host lists.
#[derive(Parser, Debug)]
#[command(name = "nssh-screenrc", version, about)]
struct Cli {
    /// screen config to rewrite (default: paths.screenrc)
    #[arg(long, value_name = "PATH")]
    screenrc: Option<String>,

    /// Print the merged config instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Lists to generate windows for (default: screen.lists)
    #[arg(value_name = "LIST")]
    lists: Vec<String>,
}

fn main() {
    init_tracing();
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let path: PathBuf = match &cli.screenrc {
        Some(p) => expand_home(p),
        None => config.screenrc(),
    };
    let lists = if cli.lists.is_empty() {
        config.screen.lists.clone()
    } else {
        cli.lists
    };

    let store = ListStore::new(config.list_dir());
    let merged = rewrite(&path, &store, &lists, &config.screen, cli.dry_run)?;

    if cli.dry_run {
        io::stdout()
            .write_all(merged.as_bytes())
            .context("failed to write merged config")?;
    }
    Ok(())
}
