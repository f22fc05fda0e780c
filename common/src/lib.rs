//! # Netkit Common
//!
//! Types shared by the netkit tools:
//!
//! * **[`config`]**: run configuration and the fixed defaults of the tools.
//! * **[`error`]**: the run-level error taxonomy and its exit codes.
//! * **[`vendors`]**: the vendor lookup port and its outcome type.

pub mod config;
pub mod error;
pub mod vendors;
