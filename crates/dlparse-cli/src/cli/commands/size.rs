//! Size and traffic commands.

use anyhow::Result;
use dlparse_core::Toolkit;

use crate::cli::print_opt;

pub fn run_size(kit: &Toolkit, text: &str, unit: Option<&str>) {
    tracing::debug!(base = ?kit.units().base(), "parsing size");
    print_opt(kit.byte_size(text, unit));
}

/// Print traffic as JSON (`"unlimited"` or `{"bytes":N}`), or `none`.
pub fn run_traffic(kit: &Toolkit, text: &str, unit: Option<&str>) -> Result<()> {
    let traffic = kit
        .traffic(text, unit)
        .map(|t| serde_json::to_string(&t))
        .transpose()?;
    print_opt(traffic);
    Ok(())
}
