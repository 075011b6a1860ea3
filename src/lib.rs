//! Taskforge: an in-memory task management service.
//!
//! This crate provides the core functionality for creating, reading,
//! updating, and deleting task records, exposed to clients through a thin
//! REST transport backed by an in-memory store.
//!
//! # Architecture
//!
//! Taskforge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, HTTP)
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, and lifecycle management

pub mod task;
