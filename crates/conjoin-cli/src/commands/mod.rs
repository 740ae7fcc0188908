//! CLI command implementations.

mod check;
mod format;
mod keys;

pub use check::{run_check, CheckArgs, Problem};
pub use format::{run_format, FormatArgs};
pub use keys::{run_keys, KeysArgs};
