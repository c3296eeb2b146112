use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::feed::{feed_cmd, listing_cmd, posts_cmd};
use crate::text::{excerpt_cmd, reading_time_cmd};

mod feed;
mod text;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Prints the feed description of a markdown file
    Excerpt(ExcerptArgs),
    /// Prints the estimated reading time of a markdown file, in minutes
    ReadingTime(FileArgs),
    /// Prints the RSS feed built from the configured records
    Feed(ConfigArgs),
    /// Prints the llms.txt listing of the configured posts
    Listing(ConfigArgs),
    /// Prints the reading time of every configured post and review
    Posts(ConfigArgs),
}

#[derive(Parser, Debug)]
struct ExcerptArgs {
    /// Markdown file
    #[arg(short, long)]
    file: PathBuf,

    /// Maximum length before the ellipsis
    #[arg(short, long)]
    max_length: Option<usize>,
}

#[derive(Parser, Debug)]
struct FileArgs {
    /// Markdown file
    #[arg(short, long)]
    file: PathBuf,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Config path
    #[arg(short, long, default_value = "folio.toml")]
    config_path: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let res = match args {
        Args::Excerpt(args) => excerpt_cmd(args),
        Args::ReadingTime(args) => reading_time_cmd(args),
        Args::Feed(args) => feed_cmd(args),
        Args::Listing(args) => listing_cmd(args),
        Args::Posts(args) => posts_cmd(args),
    };

    match res {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
