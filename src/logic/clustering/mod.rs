//! Clustering Module - Density-Based Campaign Grouping
//!
//! DBSCAN over the scaled feature matrix. Everything here is
//! deterministic for a fixed row ordering; no randomness anywhere.

pub mod dbscan;

// Re-export common types
pub use dbscan::{ClusterLabel, Dbscan};
