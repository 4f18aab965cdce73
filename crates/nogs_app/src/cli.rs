//! Command-line interface for the Boggle Nogs server.
//!
//! Every option has a default, so a bare `boggle-nogs --local` runs a working
//! proxy on port 1616 from a checkout of this repository.

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use url::Url;

/// Minimal, filterable front end for the Hacker News listing pages.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Public domain of this server, if NOT behind a proxy
    #[arg(long, env = "NOGS_DOMAIN", default_value = "")]
    pub domain: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 1616)]
    pub port: u16,

    /// Running on localhost; overrides --domain with http://localhost:<port>
    #[arg(long)]
    pub local: bool,

    /// Root of the upstream listing site
    #[arg(long, default_value = "https://news.ycombinator.com/")]
    pub upstream: Url,

    /// Directory holding head.html and foot.html
    #[arg(long, default_value = "static")]
    pub templates_dir: PathBuf,

    /// Line-delimited regexes; posts from matching sites are hidden
    #[arg(long, default_value = "ignore-site.txt")]
    pub ignore_site: PathBuf,

    /// Line-delimited regexes; posts with matching titles are hidden
    #[arg(long, default_value = "ignore-title.txt")]
    pub ignore_title: PathBuf,

    /// Log file, truncated on startup; logs also go to the terminal
    #[arg(long, default_value = "log.log")]
    pub log_file: PathBuf,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Timeout for each upstream request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl Cli {
    /// Domain prefix used when logging requests and in 404 pages.
    pub fn link_domain(&self) -> String {
        if self.local {
            format!("http://localhost:{}", self.port)
        } else {
            self.domain.clone()
        }
    }
}
