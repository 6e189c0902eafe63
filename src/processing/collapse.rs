//! Upstream block list parsing and CIDR collapsing.
//!
//! The upstream file has `#` header lines followed by `<network> <comment>` rows.
//! Collapsing merges overlapping and adjacent networks into the smallest
//! equivalent set of CIDR blocks.

use ipnet::Ipv4Net;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An upstream list split into its parts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Blocklist {
    /// Header lines starting with `#`, in file order.
    pub comments: Vec<String>,
    /// Networks in file order.
    pub networks: Vec<Ipv4Net>,
    /// Trailing comment per network, last one wins for repeats.
    pub network_comments: HashMap<Ipv4Net, String>,
}

/// Parse `a.b.c.d` (a /32) or `a.b.c.d/n` as a network.
///
/// Host bits set below the prefix are rejected, `10.0.0.1/24` is not a network.
pub fn parse_network(token: &str) -> Result<Ipv4Net, String> {
    let net = if token.contains('/') {
        Ipv4Net::from_str(token).map_err(|e| format!("Invalid network {token}: {e}"))?
    } else {
        let addr = Ipv4Addr::from_str(token).map_err(|e| format!("Invalid address {token}: {e}"))?;
        Ipv4Net::new(addr, 32).map_err(|e| format!("Invalid address {token}: {e}"))?
    };
    if net.trunc() != net {
        return Err(format!("{token} has host bits set"));
    }
    Ok(net)
}

/// Split upstream text into header comments and IPv4 networks.
///
/// Rows whose first token is not an IPv4 network (IPv6, host bits set, junk)
/// are skipped.
pub fn parse_blocklist(raw: &str) -> Blocklist {
    let mut list = Blocklist::default();
    let mut skipped = 0usize;

    for line in raw.trim_start_matches('\u{feff}').lines() {
        if line.starts_with('#') {
            list.comments.push(line.to_string());
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (token, comment) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line, ""),
        };
        match parse_network(token) {
            Ok(net) => {
                list.networks.push(net);
                list.network_comments.insert(net, comment.to_string());
            }
            Err(e) => {
                log::debug!("Skipping {token:?}: {e}");
                skipped += 1;
            }
        }
    }

    log::debug!(
        "Parsed {} networks, {} header lines, skipped {skipped}",
        list.networks.len(),
        list.comments.len()
    );
    list
}

/// Collapse networks into the minimal sorted set of CIDR blocks covering the same addresses.
pub fn collapse_networks(networks: &[Ipv4Net]) -> Vec<Ipv4Net> {
    Ipv4Net::aggregate(&networks.to_vec())
}
