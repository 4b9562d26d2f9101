//! AegisOps - a security operations console for LLM threat monitoring.
//!
//! Renders threats, sessions, policies, tool permissions, integrations, and
//! incident detail from a builtin fixture dataset, with per-page view state
//! (filters, selection drawers, policy toggles, threshold sliders) layered
//! on top of the read-only store.

pub mod cli;
pub mod config;
pub mod fixtures;
pub mod incident;
pub mod logging;
pub mod pages;
pub mod state;
