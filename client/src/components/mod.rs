//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, notices, guard placeholder) and
//! read/write shared state from Leptos context providers.

pub mod header;
pub mod loading_screen;
pub mod module_card;
pub mod notice_tray;
pub mod route_guard;
pub mod sso_buttons;
