//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Form validation lives next to its page as plain
//! functions so it can be tested without a browser.

pub mod auth;
pub mod console;
pub mod password_recovery;
pub mod profile;
