//! CLI module - Command-line interface for the demo binary.

mod args;

pub use args::Cli;
