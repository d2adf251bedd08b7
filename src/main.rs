use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use localmr::{mapreduce, Config, LineCountWorker, PathInput, WordCountWorker, DATA_DIR};

/// Fold a per-file count across every regular file in a directory.
#[derive(Parser)]
struct Args {
    /// Directory whose files become one map task each.
    data_dir: PathBuf,

    /// Count words instead of lines.
    #[arg(long)]
    words: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("localmr=debug")
        .init();

    let args = Args::parse();
    let mut config = Config::new();
    config.insert(DATA_DIR.to_string(), args.data_dir.display().to_string());

    let total = if args.words {
        mapreduce::<WordCountWorker<PathInput>>(&config).await?
    } else {
        mapreduce::<LineCountWorker<PathInput>>(&config).await?
    };
    println!("{}", total);

    Ok(())
}
