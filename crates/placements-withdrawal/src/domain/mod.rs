//! Domain layer for the Withdrawal context.

pub mod blocking;
pub mod commands;
pub mod context;
pub mod eligibility;
pub mod entities;
pub mod status;
pub mod tree;
