//! # Netkit Core
//!
//! The logic behind both netkit tools, free of any terminal concerns.
//!
//! * **[`folders`]**: lists two folders and intersects their entry names.
//! * **[`table`]**: in-memory CSV table with an append-only column model.
//! * **[`vendors`]**: HTTP implementation of the vendor lookup port.
//! * **[`enrichment`]**: the CSV vendor enrichment use case.
//! * **[`summary`]**: frequency table of the manufacturer column.

pub mod enrichment;
pub mod folders;
pub mod summary;
pub mod table;
pub mod vendors;
