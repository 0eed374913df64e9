//! Side-by-side column assignment within a cluster.
//!
//! Column order is the cluster's arrival order. It is stable and
//! deterministic but not sorted by start time or course; sort the
//! blocks before clustering for a canonical left-to-right order.

use std::collections::HashMap;

use super::CollisionCluster;
use crate::models::BlockKey;

/// Position of a block inside its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnAssignment {
    /// 0-based column.
    pub column_index: usize,
    /// Number of columns in the cluster.
    pub total_columns: usize,
}

/// Columns for each member, aligned with [`CollisionCluster::members`].
pub fn assign_columns(cluster: &CollisionCluster) -> Vec<ColumnAssignment> {
    let total_columns = cluster.len();
    (0..total_columns)
        .map(|column_index| ColumnAssignment {
            column_index,
            total_columns,
        })
        .collect()
}

/// Key → column lookup over several clusters.
pub fn column_map<'a>(
    clusters: impl IntoIterator<Item = &'a CollisionCluster>,
) -> HashMap<BlockKey, ColumnAssignment> {
    let mut map = HashMap::new();
    for cluster in clusters {
        for (member, assignment) in cluster.members().iter().zip(assign_columns(cluster)) {
            map.insert(member.key.clone(), assignment);
        }
    }
    map
}
