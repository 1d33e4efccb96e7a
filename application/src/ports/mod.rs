//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that presentation and infrastructure adapters
//! must implement.

pub mod interaction;
