//! Settings come from a TOML file picked by build profile or `--settings`.
//! See `bin/settings_demo.rs` for a binary that loads them by hand.

mod cli;
pub use clap::{Parser, Subcommand};
pub use cli::*;

mod settings;
pub use settings::*;
