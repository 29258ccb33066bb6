//! Identity boundary of the client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the user and session payloads persisted in browser storage,
//! and `identity` is the seam where a real identity provider would plug in.

pub mod identity;
pub mod types;
