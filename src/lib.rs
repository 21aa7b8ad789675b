//! Todo TUI - a terminal to-do list.
//!
//! The core is [`controller::ListController`], which owns the list and
//! talks to its collaborators through the traits in [`traits`]. The rest of
//! the crate is one host for it: stores in [`adapters`], a ratatui front end
//! in [`ui`] and [`app`], and the terminal plumbing the binary needs.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
