//! Signup - a three-step registration form for the terminal
//!
//! The form logic (`form`) is independent of the terminal front end (`ui`),
//! so it can be driven from tests and the `check` subcommand.

pub mod app;
pub mod check;
pub mod config;
pub mod form;
pub mod logging;
pub mod ui;
