//! Various configuration options to control serato_tags

mod global_options;

pub use global_options::{GlobalOptions, apply_global_options};

pub(crate) use global_options::global_options;
