use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use spdlog::{info, warn};

use folio::config::Config;
use folio::logger::configure_logger;
use folio::server::server_run;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

fn startup_banner(config: &Config) -> String {
    format!("folio {} serving {} feeds at http://{}:{}/rss.xml",
            env!("CARGO_PKG_VERSION"), config.site.url, config.server.address, config.server.port)
}

#[ntex::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run folio --help");
            return Ok(());
        }
    };

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("{}", startup_banner(&config));
    info!("Posts from {}, reviews from {}",
        config.records.posts_file.display(), config.records.reviews_file.display());

    server_run(config).await?;
    Ok(())
}
