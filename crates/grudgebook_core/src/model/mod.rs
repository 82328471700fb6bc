//! Domain model for the grievance journal.
//!
//! # Responsibility
//! - Define the canonical entry record and its date-bucket container.
//! - Keep every store invariant enforceable without touching persistence.
//!
//! # Invariants
//! - Entries live in exactly one date bucket, in insertion order.
//! - A date key with zero entries never exists.

pub mod entry;
pub mod journal;
