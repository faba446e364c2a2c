//! Command line interface: argument definitions and command dispatch

pub mod commands;
pub mod runner;
pub mod time_arg;
