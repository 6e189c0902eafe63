//! RouterOS script generation.
//!
//! The script drops every entry of the address list and re-adds the rendered
//! addresses from a local array:
//!
//! ```text
//! # Generated on 2024-05-01 12:00:00
//! /ip firewall address-list remove [find list=blocklist]
//! :local ips { \
//! { "1.2.3.4" };\
//! { "5.6.7.8" }\
//! };
//! :foreach ip in=$ips do={
//! 	/ip firewall address-list add list=blocklist address=$ip dynamic=yes timeout=1d
//! }
//! :set ips
//! ```

use crate::models::is_valid_address;
use chrono::{DateTime, Utc};
use itertools::{Itertools, Position};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the script stamped with the current UTC time.
pub fn render_script(addresses: &[String], list_name: &str, timeout_days: Option<u32>) -> String {
    render_script_at(addresses, list_name, timeout_days, Utc::now())
}

/// Render the script with an explicit generation time.
///
/// With `timeout_days` the entries are added as `dynamic=yes timeout=<N>d` and the
/// array is cleared at the end, without it entries never expire.
/// Entries failing validation are left out.
pub fn render_script_at(
    addresses: &[String],
    list_name: &str,
    timeout_days: Option<u32>,
    generated_at: DateTime<Utc>,
) -> String {
    let mut script = String::new();
    script.push_str(&format!(
        "# Generated on {}\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    script.push_str(&format!(
        "/ip firewall address-list remove [find list={list_name}]\n"
    ));
    script.push_str(":local ips { \\\n");

    let valid = addresses.iter().filter(|ip| {
        let ok = is_valid_address(ip);
        if !ok {
            log::warn!("Skipping invalid address at render time: {ip:?}");
        }
        ok
    });
    for (position, ip) in valid.with_position() {
        script.push_str(&format!("{{ \"{ip}\" }}"));
        if matches!(position, Position::First | Position::Middle) {
            script.push(';');
        }
        script.push_str("\\\n");
    }

    script.push_str("};\n");
    script.push_str(":foreach ip in=$ips do={\n");
    script.push_str(&format!(
        "\t/ip firewall address-list add list={list_name} address=$ip"
    ));
    if let Some(days) = timeout_days {
        script.push_str(&format!(" dynamic=yes timeout={days}d"));
    }
    script.push('\n');
    script.push_str("}\n");
    if timeout_days.is_some() {
        script.push_str(":set ips\n");
    }

    script
}
