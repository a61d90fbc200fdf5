//! DBSCAN - Density-Based Clustering
//!
//! Naive O(n^2) neighborhoods, acceptable at the working-set sizes in
//! scope (hundreds to low thousands per pass).
//!
//! Semantics:
//! - eps-neighborhood of p includes p itself (Euclidean distance <= eps)
//! - core point: neighborhood size >= min_samples
//! - clusters are the transitive closure of reachability from core points
//! - border points keep the first cluster whose expansion reaches them;
//!   seeds are visited in row order and each frontier in ascending row
//!   index, so the assignment is reproducible for identical input order
//! - points reachable from no core point are noise

use ndarray::Array2;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLUSTER LABEL
// ============================================================================

/// Label of one matrix row after clustering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClusterLabel {
    /// Member of cluster `0..k-1`
    Cluster(usize),
    /// Reachable from no core point
    Noise,
}

impl ClusterLabel {
    pub fn is_noise(&self) -> bool {
        matches!(self, ClusterLabel::Noise)
    }

    pub fn cluster_id(&self) -> Option<usize> {
        match self {
            ClusterLabel::Cluster(id) => Some(*id),
            ClusterLabel::Noise => None,
        }
    }
}

// ============================================================================
// DBSCAN
// ============================================================================

/// DBSCAN parameters. Validation happens in `DetectionConfig`; the
/// engine assumes eps > 0 and min_samples >= 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dbscan {
    /// Neighborhood radius in scaled feature space
    pub eps: f64,
    /// Minimum neighborhood size (self included) for a core point
    pub min_samples: usize,
}

impl Dbscan {
    pub fn new(eps: f64, min_samples: usize) -> Self {
        Self { eps, min_samples }
    }

    /// Label every row of `matrix`. An empty matrix yields an empty
    /// label vector, not an error.
    pub fn cluster(&self, matrix: &Array2<f64>) -> Vec<ClusterLabel> {
        let n = matrix.nrows();
        if n == 0 {
            return Vec::new();
        }

        let neighborhoods: Vec<Vec<usize>> =
            (0..n).map(|i| self.neighborhood(matrix, i)).collect();
        let is_core: Vec<bool> = neighborhoods
            .iter()
            .map(|nb| nb.len() >= self.min_samples)
            .collect();

        let mut labels = vec![None::<ClusterLabel>; n];
        let mut next_cluster = 0usize;

        for seed in 0..n {
            if labels[seed].is_some() || !is_core[seed] {
                continue;
            }

            // Expand a new cluster from this unvisited core point
            let cluster = next_cluster;
            next_cluster += 1;

            labels[seed] = Some(ClusterLabel::Cluster(cluster));
            let mut queue: Vec<usize> = vec![seed];
            let mut head = 0;

            // Breadth-first expansion; neighborhoods are in ascending
            // row order, so the claim order is fixed by the input order
            while head < queue.len() {
                let p = queue[head];
                head += 1;

                // Only core points extend reachability
                if !is_core[p] {
                    continue;
                }
                for &q in &neighborhoods[p] {
                    // Already claimed: the first cluster keeps it
                    if labels[q].is_none() {
                        labels[q] = Some(ClusterLabel::Cluster(cluster));
                        queue.push(q);
                    }
                }
            }
        }

        labels
            .into_iter()
            .map(|l| l.unwrap_or(ClusterLabel::Noise))
            .collect()
    }

    /// Indices of all rows within eps of row `i`, i itself included,
    /// in ascending row order
    fn neighborhood(&self, matrix: &Array2<f64>, i: usize) -> Vec<usize> {
        let row_i = matrix.row(i);
        let eps_sq = self.eps * self.eps;
        (0..matrix.nrows())
            .filter(|&j| {
                let dist_sq: f64 = row_i
                    .iter()
                    .zip(matrix.row(j).iter())
                    .map(|(a, b)| (a - b).powi(2))
                    .sum();
                dist_sq <= eps_sq
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_empty_matrix_yields_empty_labels() {
        let dbscan = Dbscan::new(0.5, 3);
        let matrix = Array2::<f64>::zeros((0, 2));
        assert!(dbscan.cluster(&matrix).is_empty());
    }

    #[test]
    fn test_dense_group_forms_one_cluster() {
        let matrix = array![
            [0.0, 0.0],
            [0.1, 0.0],
            [0.0, 0.1],
            [5.0, 5.0], // far away
        ];
        let dbscan = Dbscan::new(0.5, 3);
        let labels = dbscan.cluster(&matrix);
        assert_eq!(labels[0], ClusterLabel::Cluster(0));
        assert_eq!(labels[1], ClusterLabel::Cluster(0));
        assert_eq!(labels[2], ClusterLabel::Cluster(0));
        assert_eq!(labels[3], ClusterLabel::Noise);
    }

    #[test]
    fn test_two_separate_clusters() {
        let matrix = array![
            [0.0, 0.0],
            [0.1, 0.0],
            [0.2, 0.0],
            [10.0, 10.0],
            [10.1, 10.0],
            [10.2, 10.0],
        ];
        let dbscan = Dbscan::new(0.5, 3);
        let labels = dbscan.cluster(&matrix);
        assert_eq!(labels[0], ClusterLabel::Cluster(0));
        assert_eq!(labels[3], ClusterLabel::Cluster(1));
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[3], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_border_point_joins_cluster() {
        // Rows 1 and 2 are core; rows 0 and 3 sit inside a core
        // neighborhood without being core themselves: border points,
        // same cluster.
        let matrix = array![
            [0.0, 0.0],
            [0.3, 0.0],
            [0.6, 0.0],
            [1.0, 0.0],
        ];
        let dbscan = Dbscan::new(0.45, 3);
        let labels = dbscan.cluster(&matrix);
        assert_eq!(labels[1], ClusterLabel::Cluster(0));
        assert_eq!(labels[3], ClusterLabel::Cluster(0));
    }

    #[test]
    fn test_isolated_points_are_noise() {
        let matrix = array![[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]];
        let dbscan = Dbscan::new(0.5, 2);
        let labels = dbscan.cluster(&matrix);
        assert!(labels.iter().all(|l| l.is_noise()));
    }

    #[test]
    fn test_determinism_across_runs() {
        let matrix = array![
            [0.0, 0.0],
            [0.2, 0.1],
            [0.1, 0.2],
            [3.0, 3.0],
            [3.1, 3.1],
            [3.2, 3.0],
            [9.0, 9.0],
        ];
        let dbscan = Dbscan::new(0.5, 3);
        let a = dbscan.cluster(&matrix);
        let b = dbscan.cluster(&matrix);
        assert_eq!(a, b);
    }
}
