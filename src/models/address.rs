//! Textual IPv4 / CIDR address validation.

use regex::Regex;
use std::sync::OnceLock;

/// Four 0-255 octets with an optional `/` and one or two digit prefix.
///
/// The prefix length is not range checked, `/33`..`/99` are accepted.
static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        Regex::new(
            r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?:/[0-9]{1,2})?$",
        )
        .expect("Invalid Regex")
    })
}

/// Check if `token` is an IPv4 address, optionally in CIDR form.
///
/// The token must already be trimmed, surrounding whitespace fails the check.
pub fn is_valid_address(token: &str) -> bool {
    get_address_regex().is_match(token)
}
