//! Roster engine for multi-location shift scheduling.
//!
//! This crate provides the scheduling core of a restaurant back office:
//! per-location weekly rosters, labor-law compliance checks with tiered
//! enforcement, and daily labor-cost analytics derived from shift
//! assignments and revenue figures.

#![warn(missing_docs)]

pub mod analytics;
pub mod api;
pub mod compliance;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
