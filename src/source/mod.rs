//! Raw list acquisition.
//!
//! - [`file`] - read the list from a local file
//! - [`http`] - fetch the list with a single HTTP GET
//!
//! Exactly one [`Source`] is chosen per run; there is no fallback between them.

mod file;
mod http;

pub use file::read_file;
pub use http::fetch_url;

use crate::config::{Config, Mode};
use crate::error::BlocklistError;
use crate::processing::EmptyPolicy;
use std::fmt;
use std::path::PathBuf;

/// Where the raw list text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Http(String),
}

impl Source {
    /// Pick the source for a render run.
    ///
    /// `Collapse` reads the list it wrote itself, so it maps to the file source.
    pub fn for_config(config: &Config) -> Source {
        match config.mode {
            Mode::Http => Source::Http(config.source_url.clone()),
            Mode::File | Mode::Collapse => Source::File(config.collapsed_file()),
        }
    }

    pub async fn fetch_raw_text(&self) -> Result<String, BlocklistError> {
        match self {
            Source::File(path) => read_file(path),
            Source::Http(url) => fetch_url(url).await,
        }
    }

    /// How an empty parse result is treated for this source.
    pub fn empty_policy(&self) -> EmptyPolicy {
        match self {
            Source::File(_) => EmptyPolicy::Fail,
            Source::Http(_) => EmptyPolicy::Warn,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Http(url) => write!(f, "{url}"),
        }
    }
}
