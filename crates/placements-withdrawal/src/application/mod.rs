//! Application layer for the Withdrawal context.

pub mod command_handlers;
pub mod config;
pub mod failure_reporter;
pub mod ports;
