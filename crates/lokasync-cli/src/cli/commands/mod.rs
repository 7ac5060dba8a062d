//! CLI command handlers, one file per command.

mod completions;
mod drive_url;
mod payload;

pub use completions::run_completions;
pub use drive_url::run_drive_url;
pub use payload::{run_payload, PayloadOptions};
