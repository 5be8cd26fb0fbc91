//! Duration command.

use dlparse_core::Toolkit;

use crate::cli::TimeUnit;

pub fn run_duration(kit: &Toolkit, text: &str, unit: TimeUnit) {
    match unit {
        TimeUnit::Seconds => println!("{}", kit.seconds(text)),
        TimeUnit::Minutes => println!("{}", kit.minutes(text)),
        TimeUnit::Hours => println!("{}", kit.hours(text)),
    }
}
