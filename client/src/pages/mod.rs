//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is not a page concern; the route guard in
//! `app` decides whether a page is mounted at all.

pub mod dashboard;
pub mod login;
pub mod module_page;
pub mod not_found;
pub mod production_analyzer;
