//! # Netkit CLI
//!
//! Terminal front-ends for the netkit tools. Each binary in `src/bin`
//! parses its arguments with [`commands`], runs the matching command and
//! turns the outcome into a process exit code.

pub mod commands;
pub mod terminal;
