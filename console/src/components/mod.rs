//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the console chrome (guard, sidebar, header, toasts)
//! while reading shared state from Leptos context providers installed by
//! `App`.

pub mod admin_route;
pub mod notification;
pub mod sidebar;
pub mod top_nav;
