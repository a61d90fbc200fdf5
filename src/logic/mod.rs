//! Logic Module
//!
//! The detection core, leaf-first:
//! - `events`: raw attack event types
//! - `features`: codebook encoding + standard scaling into a matrix
//! - `clustering`: DBSCAN over the scaled matrix
//! - `attribution`: threat-actor scoring per cluster
//! - `campaign`: campaign records and aggregation
//! - `config`: tunable parameters with validation
//! - `pipeline`: the full pass, snapshot in / result out

pub mod events;
pub mod features;
pub mod clustering;
pub mod attribution;
pub mod campaign;
pub mod config;
pub mod pipeline;

// Re-export main types for convenience
pub use events::{AttackEvent, AttackType};
pub use features::{Codebook, FeatureExtractor, FeatureMatrix};
pub use clustering::{ClusterLabel, Dbscan};
pub use attribution::{Attribution, AttributionScorer, ThreatActor};
pub use campaign::{CampaignAggregator, CampaignAnalysis, CampaignRecord};
pub use config::DetectionConfig;
pub use pipeline::CampaignDetector;
