//! Domain models for the block list.
//!
//! - [`is_valid_address`] - textual IPv4 / CIDR check applied to every list entry

mod address;

pub use address::is_valid_address;
