//! Command-line interface support.

pub mod commands;
