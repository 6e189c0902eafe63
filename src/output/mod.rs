//! Output generation and persistence.
//!
//! - [`script`] - RouterOS address-list script
//! - [`collapsed`] - collapsed `.ipv4` list
//! - [`writer`] - writing files to disk

mod collapsed;
mod script;
mod writer;

pub use collapsed::{format_collapsed, format_network};
pub use script::{render_script, render_script_at, TIMESTAMP_FORMAT};
pub use writer::write_output;
