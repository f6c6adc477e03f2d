#![forbid(unsafe_code)]

mod tracing_setup;
mod summary;

pub use summary::{print_command_summary, print_season_table};
pub use tracing_setup::init_tracing;
