//! Campaign Module - Output Records
//!
//! Merges cluster labels and attribution into immutable campaign
//! records with summary statistics.
//!
//! ## Structure
//! - `types`: CampaignRecord, CampaignAnalysis, Sophistication
//! - `aggregator`: grouping, summary stats, ordering, id assignment

pub mod types;
pub mod aggregator;

// Re-export main types for convenience
pub use aggregator::{CampaignAggregator, SophisticationThresholds};
pub use types::{CampaignAnalysis, CampaignRecord, Sophistication};
