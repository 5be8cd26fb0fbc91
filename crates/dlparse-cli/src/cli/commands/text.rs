//! Boolean, list and number-word commands.

use dlparse_core::Toolkit;

use crate::cli::print_opt;

pub fn run_bool(kit: &Toolkit, text: &str) {
    print_opt(kit.boolean(text));
}

/// Print each entry on its own line.
pub fn run_entries(kit: &Toolkit, text: &str, allow_whitespace: bool) {
    for entry in kit.entries(text, allow_whitespace) {
        println!("{entry}");
    }
}

pub fn run_number(kit: &Toolkit, text: &str) {
    print_opt(kit.number(text));
}
