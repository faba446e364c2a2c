//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The session repository contract itself lives in the domain layer
//! ([`flow_domain::SessionRepository`]).

pub mod date_provider;
pub mod id_provider;
