//! Packages command: group link lines and print JSON.

use anyhow::{Context, Result};
use dlparse_core::Toolkit;
use std::io::Read;
use std::path::Path;

/// Read link lines from `path` (or stdin) and print the grouping as JSON.
pub fn run_packages(kit: &Toolkit, path: Option<&Path>) -> Result<()> {
    let input = match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };

    let links = parse_link_lines(&input);
    tracing::info!(links = links.len(), "grouping links");
    let packages = kit.packages(links);
    println!("{}", serde_json::to_string_pretty(&packages)?);
    Ok(())
}

/// `name<TAB>url` lines; a line without a tab is its own name. Blank lines skipped.
pub(crate) fn parse_link_lines(input: &str) -> Vec<(String, String)> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once('\t') {
            Some((name, url)) => (name.trim().to_string(), url.trim().to_string()),
            None => (line.to_string(), line.to_string()),
        })
        .collect()
}
