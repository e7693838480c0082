//! CLI subcommand implementations.

pub mod request;
