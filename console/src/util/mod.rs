//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns (storage, timers) and pure decision
//! logic (route guarding, navigation table, translations) out of pages and
//! components so they can be tested without a DOM.

pub mod guard;
pub mod i18n;
pub mod listeners;
pub mod nav_tree;
pub mod persistence;
pub mod timeout;
