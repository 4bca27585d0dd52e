//! Use-case services composing the core engines.
//!
//! # Responsibility
//! - Orchestrate specification filtering and markup rendering for callers.
//!
//! # Invariants
//! - Services never reach into composite or node internals.

pub mod catalog_service;
