//! Modules layer - Infrastructure components for external integrations
//!
//! Contains clients and adapters for external services: document storage,
//! password hashing and the postal code lookup service.

pub mod document_store;
pub mod password;
pub mod postal_code;
