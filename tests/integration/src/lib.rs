//! Integration test utilities for the session layer
//!
//! This crate wires a channel transport, a session manager and a message
//! log together the way an application would, and provides raw wire frames
//! to drive them with.

pub mod fixtures;

pub use fixtures::*;
pub use helpers::*;
