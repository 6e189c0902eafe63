//! Address list parsing.
//!
//! Turns raw list text into the ordered entries that get rendered.

use crate::error::BlocklistError;
use crate::models::is_valid_address;
use colored::Colorize;

/// What to do when no valid address survives parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    /// Empty result is a validation error.
    Fail,
    /// Log a warning and hand back the empty list.
    Warn,
}

/// Extract the address token of one line, `None` when the line has nothing usable.
///
/// Everything from the first `#` is dropped, the rest is trimmed and validated.
pub fn address_from_line(line: &str) -> Option<&str> {
    let token = line.split('#').next().unwrap_or_default().trim();
    if token.is_empty() {
        return None;
    }
    if !is_valid_address(token) {
        log::trace!("Skipping invalid line: {line:?}");
        return None;
    }
    Some(token)
}

/// Parse raw list text into valid addresses.
///
/// Input order and duplicates are kept. A leading byte order mark is ignored.
pub fn parse_address_list(raw: &str, policy: EmptyPolicy) -> Result<Vec<String>, BlocklistError> {
    let addresses: Vec<String> = raw
        .trim_start_matches('\u{feff}')
        .split('\n')
        .filter_map(address_from_line)
        .map(str::to_string)
        .collect();

    if addresses.is_empty() {
        match policy {
            EmptyPolicy::Fail => {
                return Err(BlocklistError::Validation(
                    "No valid IPv4 addresses found after parsing".to_string(),
                ))
            }
            EmptyPolicy::Warn => log::warn!("{}", "No valid IPv4 addresses found.".yellow()),
        }
    } else {
        log::info!(
            "Found {} IPv4 addresses.",
            addresses.len().to_string().green()
        );
    }
    Ok(addresses)
}
