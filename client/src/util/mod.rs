//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers)
//! and the auth/guard rules from page and component logic to improve reuse
//! and testability.

pub mod auth;
pub mod guard;
pub mod session_store;
pub mod storage;
pub mod task;
