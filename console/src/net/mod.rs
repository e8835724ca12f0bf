//! Networking modules for the host API and the identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` fetches console configuration from the host. `identity` defines the
//! provider contract with its REST adapter, plus an in-memory one for tests.
//! `auth` runs the admin flows on top of it and `types` holds the wire schema.

pub mod api;
pub mod auth;
pub mod identity;
#[cfg(test)]
pub mod identity_memory;
pub mod identity_rest;
pub mod types;
