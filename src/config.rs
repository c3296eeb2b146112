use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::content::excerpt::DEFAULT_EXCERPT_LENGTH;
use crate::record::record_source::JsonFileSource;

#[derive(Deserialize, Debug, Clone)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub url: String,
    /// Shown for reviews and for posts without an author
    pub author: String,
}

#[derive(Deserialize)]
pub struct Records {
    pub posts_file: PathBuf,
    pub reviews_file: PathBuf,
}

#[derive(Deserialize, Default)]
pub struct Defaults {
    pub excerpt_length: Option<usize>,
}

#[derive(Deserialize, Default, Debug)]
pub struct Listing {
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub sections: Vec<ListingSection>,
    pub sitemap: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ListingSection {
    pub heading: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: Site,
    pub records: Records,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub listing: Listing,
    pub server: Server,
    pub log: Option<Log>,
}

impl Config {
    pub fn excerpt_length(&self) -> usize {
        self.defaults.excerpt_length.unwrap_or(DEFAULT_EXCERPT_LENGTH)
    }

    pub fn record_source(&self) -> JsonFileSource {
        JsonFileSource::new(self.records.posts_file.clone(), self.records.reviews_file.clone())
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let str_path = path.to_string_lossy().to_string();
    if !str_path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent()
        .ok_or_else(|| io::Error::new(ErrorKind::NotFound, "Executable has no parent directory"))?;
    Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.records = Records {
        posts_file: parse_path(cfg.records.posts_file)?,
        reviews_file: parse_path(cfg.records.reviews_file)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
