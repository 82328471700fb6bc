//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the named-slot key-value access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Slot writes are whole-value replacements (last write wins).
//! - Repository construction rejects un-migrated connections.

pub mod slot_repo;
