//! List processing logic.
//!
//! - [`parse`] - raw text to validated address entries
//! - [`collapse`] - upstream list to minimal CIDR blocks

mod collapse;
mod parse;

pub use collapse::{collapse_networks, parse_blocklist, parse_network, Blocklist};
pub use parse::{address_from_line, parse_address_list, EmptyPolicy};
