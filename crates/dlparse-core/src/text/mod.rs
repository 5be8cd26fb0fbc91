//! Small text coercions: booleans, delimited lists, spelled-out numbers.

mod boolean;
mod entries;
mod number;

pub use boolean::parse_bool;
pub use entries::split_entries;
pub use number::parse_number_words;
pub(crate) use number::sum_number_words;
