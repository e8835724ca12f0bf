//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `nav`, `notify`) so individual
//! components can depend on small focused models. Only `auth` is shared
//! beyond the browser tab's views; the others are plain UI state held in
//! signals.

pub mod auth;
pub mod nav;
pub mod notify;
