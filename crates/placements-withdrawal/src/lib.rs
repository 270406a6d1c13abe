//! Placements — Withdrawal bounded context.
//!
//! Responsible for propagating the withdrawal of an application (or any
//! other directly withdrawn entity) to the placement requests, placement
//! applications and bookings that depend on it, while leaving alone any
//! subtree that records real-world progress such as an arrival.

pub mod application;
pub mod domain;
