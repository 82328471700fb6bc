//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate journal mutations with their write-through persistence.
//! - Keep rendering layers decoupled from storage details.

pub mod edit_session;
pub mod journal_service;
