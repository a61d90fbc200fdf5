//! Feature Layout - Centralized Feature Definition
//!
//! ## Rules (NEVER break these):
//! 1. Add feature -> increment FEATURE_VERSION
//! 2. Change order -> increment FEATURE_VERSION
//! 3. Remove feature -> increment FEATURE_VERSION
//!
//! Cluster geometry depends on the column order; a silent reorder
//! would change every distance without failing anywhere. The layout
//! hash lets consumers detect a mismatch instead.

use crc32fast::Hasher;

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in the exact order they appear in each row.
/// This is the SINGLE SOURCE OF TRUTH for the feature layout.
pub const FEATURE_LAYOUT: &[&str] = &[
    "hour_of_day",          // 0: Hour the attack was observed (0-23, UTC)
    "day_of_week",          // 1: Monday=0 .. Sunday=6
    "source_country_code",  // 2: Codebook code of the source country
    "attack_type_code",     // 3: Codebook code of the attack type
    "intensity",            // 4: Severity 1-10
    "target_country_code",  // 5: Codebook code of the target country
    "source_lat_norm",      // 6: Source latitude / 90
    "source_lon_norm",      // 7: Source longitude / 180
];

/// Number of features in the vector
pub const FEATURE_COUNT: usize = FEATURE_LAYOUT.len();

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 hash over the layout names, for compatibility checks between
/// a stored matrix and the code that interprets it
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(b"|");
    }
    hasher.finalize()
}

/// Index of a feature by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_eight_features() {
        assert_eq!(FEATURE_COUNT, 8);
    }

    #[test]
    fn test_layout_hash_is_stable() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_feature_index() {
        assert_eq!(feature_index("hour_of_day"), Some(0));
        assert_eq!(feature_index("source_lon_norm"), Some(7));
        assert_eq!(feature_index("nonexistent"), None);
    }
}
