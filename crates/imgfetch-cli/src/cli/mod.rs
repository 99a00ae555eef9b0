//! CLI for imgfetch.

mod prompt;
mod report;

use clap::Parser;
use imgfetch_core::config;
use imgfetch_core::ImageFetcher;
use std::io;
use std::path::PathBuf;

pub use prompt::read_url;
pub use report::{input_error_line, status_line};

/// Fetch one image over HTTP(S) into a shared folder.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "Fetch an image from a URL and save it to a shared folder", long_about = None)]
pub struct Cli {
    /// Direct HTTP/HTTPS image URL. Prompted for when omitted.
    pub url: Option<String>,

    /// Directory to save into (default: Fetched_Images, or `output_dir` from config.toml).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Every outcome, including a broken config or unreadable stdin, ends as one
    /// printed status line; nothing here fails the process.
    pub fn run_from_args() {
        let cli = Cli::parse();
        let cfg = config::load_or_default();
        tracing::debug!("using config: {:?}", cfg);

        let url = match cli.url {
            Some(url) => url,
            None => match read_url(io::stdin().lock(), io::stdout()) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("no URL read: {:#}", e);
                    println!("{}", input_error_line(&e));
                    return;
                }
            },
        };
        let output_dir = cli.output_dir.unwrap_or_else(|| cfg.output_dir.clone());

        let result = ImageFetcher::from_config(&cfg).fetch(&url, &output_dir);
        println!("{}", status_line(&result));
    }
}

#[cfg(test)]
mod tests;
