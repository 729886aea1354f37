use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use clap::Parser;
use tag_tally::{request, Config};

/// Count how often tags occur in a directory of JSON documents.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated list of tags to look up, defaults to the tags in the
    /// tag list file.
    tags: Option<String>,

    /// Tag list file with one tag per line.
    #[arg(long, default_value = "tags.txt")]
    tag_list: PathBuf,

    /// Directory of JSON documents to count tags from.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory to keep the cached tag counts in.
    #[arg(long, default_value = "cached")]
    cache_dir: PathBuf,

    /// Ignore cached counts and rescan the data directory.
    #[arg(long)]
    refresh: bool,

    /// Print the time taken to stderr.
    #[arg(short, long)]
    time: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            requested_tags: cli.tags.as_deref().map(request::split_tag_arg),
            tag_list_path: cli.tag_list.clone(),
            data_dir: cli.data_dir.clone(),
            cache_dir: cli.cache_dir.clone(),
            refresh: cli.refresh,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let start = Instant::now();

    let cli = Cli::parse();
    let report = tag_tally::run(&Config::from(&cli))?;
    print!("{report}");

    let elapsed = start.elapsed();
    log::info!("Done in {elapsed:?}");
    if cli.time {
        eprintln!("benchmark: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    }

    Ok(())
}
