//! Name and alias commands.

use dlparse_core::name::NameMode;
use dlparse_core::Toolkit;

pub fn run_name(kit: &Toolkit, text: &str, purge: bool) {
    let mode = if purge {
        NameMode::Purged
    } else {
        NameMode::Strict
    };
    println!("{}", kit.name(text, mode));
}

pub fn run_alias(kit: &Toolkit, text: &str) {
    println!("{}", kit.alias(text));
}
