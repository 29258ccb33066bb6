//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `nav`, `notice`, etc.) so individual
//! components can depend on small focused models. Each is provided as an
//! `RwSignal` by the root `App` or owned locally by its page.

pub mod analyzer;
pub mod auth;
pub mod modules;
pub mod nav;
pub mod notice;
