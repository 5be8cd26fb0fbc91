//! CLI command handlers, grouped by the kind of value they parse.

mod duration;
mod hash;
mod name;
mod packages;
mod size;
mod text;

pub use duration::run_duration;
pub use hash::{run_hash, run_verify};
pub use name::{run_alias, run_name};
pub use packages::run_packages;
pub use size::{run_size, run_traffic};
pub use text::{run_bool, run_entries, run_number};

#[cfg(test)]
pub(crate) use packages::parse_link_lines;
