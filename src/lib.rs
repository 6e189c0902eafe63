//! Build RouterOS address-list scripts from AbuseIPDB IPv4 block lists.
//!
//! Pipeline: [`source`] -> [`processing`] -> [`output`], run once per process.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

use crate::config::Config;
use crate::error::BlocklistError;
use crate::output::{format_collapsed, render_script_at, write_output};
use crate::processing::{collapse_networks, parse_address_list, parse_blocklist};
use crate::source::{fetch_url, Source};
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::path::PathBuf;

/// Read, parse, render and write the script for `config`.
///
/// Returns the written path, or `None` when the source had no addresses and
/// its policy allows that.
pub async fn run_render(config: &Config) -> Result<Option<PathBuf>, BlocklistError> {
    run_render_at(config, Utc::now()).await
}

/// [`run_render`] with a fixed generation timestamp.
pub async fn run_render_at(
    config: &Config,
    generated_at: DateTime<Utc>,
) -> Result<Option<PathBuf>, BlocklistError> {
    let source = Source::for_config(config);
    log::debug!("Source for {:?} mode: {source}", config.mode);

    let raw = source.fetch_raw_text().await?;
    let addresses = parse_address_list(&raw, source.empty_policy())?;
    if addresses.is_empty() {
        log::info!("Nothing to do, no script written.");
        return Ok(None);
    }

    log::info!(
        "Generating RouterOS script for list {}...",
        config.list_name.on_blue()
    );
    let script = render_script_at(&addresses, &config.list_name, config.timeout_days, generated_at);

    let output_file = config.output_file();
    write_output(&output_file, &script)?;
    log::info!("Script saved to {}", output_file.display());
    Ok(Some(output_file))
}

/// Download the upstream list, keep a raw copy and write its collapsed form.
///
/// Returns the path of the collapsed file.
pub async fn run_collapse(config: &Config) -> Result<PathBuf, BlocklistError> {
    let raw = fetch_url(&config.source_url).await?;
    write_output(&config.raw_file(), &raw)?;

    let list = parse_blocklist(&raw);
    let collapsed = collapse_networks(&list.networks);
    if collapsed.is_empty() {
        log::warn!("No IPv4 networks found in {}", config.source_url);
    }
    log::info!(
        "Collapsed {} networks into {} blocks",
        list.networks.len().to_string().green(),
        collapsed.len().to_string().green()
    );

    let collapsed_file = config.collapsed_file();
    write_output(&collapsed_file, &format_collapsed(&list, &collapsed))?;
    Ok(collapsed_file)
}
