//! Collision grouping and grid layout.
//!
//! Turns one schedule candidate into a (row × weekday) grid of cells:
//!
//! 1. [`cluster_day`] partitions a day's blocks by pairwise/transitive
//!    interval overlap.
//! 2. [`assign_columns`] gives each member of a cluster a side-by-side
//!    column.
//! 3. [`GridBuilder`] walks the time axis once and emits each block
//!    exactly once, either alone or inside its cluster's container.
//!
//! Everything is recomputed per call; nothing is cached between renders.

mod cluster;
mod columns;
mod grid;

pub use cluster::{cluster_day, ClusterMember, CollisionCluster};
pub use columns::{assign_columns, column_map, ColumnAssignment};
pub use grid::{
    materialize, Cell, CollisionCell, Grid, GridBuilder, GridRow, SingleCell, UnplacedBlock,
    UnplacedReason,
};
