//! Task lifecycle management for Taskforge.
//!
//! This module implements the full task record lifecycle: validating
//! caller-supplied fields, assigning identifiers and timestamps at creation,
//! merging updates while preserving immutable fields, and removing records.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
