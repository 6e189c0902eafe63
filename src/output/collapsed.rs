//! Collapsed list file formatting.

use crate::processing::Blocklist;
use ipnet::Ipv4Net;

/// Column the per-network comment starts at.
const COMMENT_COLUMN: usize = 17;
const MERGED_COMMENT: &str = "# MERGED";

/// Host routes print as the bare address, everything else as `a.b.c.d/n`.
pub fn format_network(net: &Ipv4Net) -> String {
    if net.prefix_len() == net.max_prefix_len() {
        net.addr().to_string()
    } else {
        net.to_string()
    }
}

/// Render the collapsed list: header comments, then one padded row per block.
///
/// A block that matches an input network keeps that network's comment,
/// blocks produced by merging are tagged `# MERGED`.
pub fn format_collapsed(list: &Blocklist, collapsed: &[Ipv4Net]) -> String {
    let mut out = String::new();
    for comment in &list.comments {
        out.push_str(comment);
        out.push('\n');
    }
    for net in collapsed {
        let comment = list
            .network_comments
            .get(net)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(MERGED_COMMENT);
        out.push_str(&format!(
            "{:<width$}{comment}\n",
            format_network(net),
            width = COMMENT_COLUMN
        ));
    }
    out
}
