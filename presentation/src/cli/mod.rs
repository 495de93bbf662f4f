//! Command line interface definitions and argument parsing

pub mod args;
pub mod commands;
