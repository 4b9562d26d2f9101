//! Command-line interface.
//!
//! Each console page maps to one subcommand; commands build the page's view
//! controller over the builtin fixture store, drive its state, and render
//! the derived view as text or JSON.

pub mod args;
pub mod commands;
pub mod render;
