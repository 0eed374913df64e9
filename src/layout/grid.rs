//! Grid materialization.
//!
//! Walks the time axis once, top to bottom, and emits one [`Cell`] per
//! (row, weekday). A block or cluster occupies its anchor row with a
//! row span; the rows it spans below are emitted as [`Cell::Covered`],
//! which renders as nothing in a row-span table model.
//!
//! # Algorithm
//!
//! 1. Per weekday: cluster the blocks that touch the axis.
//! 2. Per (row, day), in order:
//!    - an unrendered cluster anchored at this row → `Collision` (two or
//!      more members) or `Single`; its members are marked rendered;
//!    - every block touching the row already rendered → `Covered`;
//!    - nothing touches the row → `Empty`.
//!
//! A block touches row `t` when `start ≤ t < end`; its anchor is the
//! first row it touches. Each block placed on a weekday column is
//! rendered exactly once. Blocks that cannot be placed are reported in
//! [`Grid::unplaced`].

use std::collections::HashSet;

use tracing::{debug, warn};

use super::{assign_columns, cluster_day, ColumnAssignment, CollisionCluster};
use crate::axis::{DayLabel, TimeAxis, Weekday};
use crate::models::{BlockKey, Interval, ScheduleCandidate, TimeBlock};

/// One grid cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Nothing scheduled here.
    Empty,
    /// Spanned by a cell emitted in an earlier row.
    Covered,
    /// A block with no collision.
    Single(SingleCell),
    /// Two or more overlapping blocks side by side.
    Collision(CollisionCell),
}

/// A single block spanning `span` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleCell {
    pub block: TimeBlock,
    pub interval: Interval,
    pub span: usize,
}

/// A cluster rendered as one merged container.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionCell {
    pub cluster: CollisionCluster,
    /// Aligned with `cluster.members()`.
    pub columns: Vec<ColumnAssignment>,
    pub span: usize,
}

impl Cell {
    /// Rows occupied starting at this cell (0 for empty/covered).
    pub fn span(&self) -> usize {
        match self {
            Cell::Single(s) => s.span,
            Cell::Collision(c) => c.span,
            Cell::Empty | Cell::Covered => 0,
        }
    }

    /// Blocks rendered by this cell.
    pub fn blocks(&self) -> Vec<&TimeBlock> {
        match self {
            Cell::Single(s) => vec![&s.block],
            Cell::Collision(c) => c.cluster.members().iter().map(|m| &m.block).collect(),
            Cell::Empty | Cell::Covered => Vec::new(),
        }
    }

    /// Whether the renderer emits markup for this cell.
    #[inline]
    pub fn is_emitted(&self) -> bool {
        !matches!(self, Cell::Covered)
    }
}

/// One axis row.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// Row instant (minutes since midnight).
    pub instant: u32,
    /// Time label, shown on the hour and half hour.
    pub label: Option<String>,
    /// One cell per weekday, Monday first.
    pub cells: [Cell; 5],
}

/// Why a block has no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnplacedReason {
    /// The grid has no Saturday column.
    Saturday,
    /// The day label did not normalize to a weekday.
    UnrecognizedDay,
    /// The interval touches no axis row.
    OffAxis,
}

/// A block left out of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct UnplacedBlock {
    pub block: TimeBlock,
    pub reason: UnplacedReason,
}

/// Materialized grid for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<GridRow>,
    unplaced: Vec<UnplacedBlock>,
    granularity: u32,
}

impl Grid {
    #[inline]
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    /// Cell at (row, day).
    pub fn cell(&self, row: usize, day: Weekday) -> Option<&Cell> {
        self.rows.get(row).map(|r| &r.cells[day.index()])
    }

    /// Cells of one weekday column, top to bottom.
    pub fn column(&self, day: Weekday) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |r| &r.cells[day.index()])
    }

    /// Blocks that could not be placed.
    #[inline]
    pub fn unplaced(&self) -> &[UnplacedBlock] {
        &self.unplaced
    }

    /// Slot length in minutes.
    #[inline]
    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Number of blocks rendered across all cells.
    pub fn placed_block_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .map(|c| c.blocks().len())
            .sum()
    }

    /// Collision containers, in emission order.
    pub fn collisions(&self) -> impl Iterator<Item = (Weekday, &CollisionCell)> {
        self.rows.iter().flat_map(|r| {
            Weekday::ALL
                .into_iter()
                .zip(r.cells.iter())
                .filter_map(|(d, c)| match c {
                    Cell::Collision(cc) => Some((d, cc)),
                    _ => None,
                })
        })
    }
}

/// Builds grids on a time axis.
///
/// # Example
///
/// ```
/// use u_timetable::layout::{Cell, GridBuilder};
/// use u_timetable::models::{ScheduleCandidate, TimeBlock};
/// use u_timetable::axis::Weekday;
///
/// let candidate = ScheduleCandidate::new(vec![
///     TimeBlock::new("MATH101", 1, 0, "Lunes", "08:00", "09:00"),
///     TimeBlock::new("PHYS101", 1, 0, "Lunes", "08:30", "09:30"),
/// ]);
/// let grid = GridBuilder::new().build(&candidate);
/// match grid.cell(0, Weekday::Monday) {
///     Some(Cell::Collision(c)) => assert_eq!(c.span, 9),
///     other => panic!("unexpected cell {other:?}"),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder<'a> {
    axis: &'a TimeAxis,
}

impl Default for GridBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl GridBuilder<'static> {
    /// Builder on the default school-day axis.
    pub fn new() -> Self {
        Self {
            axis: TimeAxis::school_day(),
        }
    }
}

impl<'a> GridBuilder<'a> {
    /// Builder on a custom axis.
    pub fn with_axis(axis: &'a TimeAxis) -> Self {
        Self { axis }
    }

    /// The axis rows are laid out on.
    #[inline]
    pub fn axis(&self) -> &TimeAxis {
        self.axis
    }

    /// Materializes the grid for one candidate.
    pub fn build(&self, candidate: &ScheduleCandidate) -> Grid {
        let axis = self.axis;
        let mut unplaced = Vec::new();
        let mut placeable: Vec<&TimeBlock> = Vec::with_capacity(candidate.blocks.len());

        for block in &candidate.blocks {
            let reason = match block.day_label() {
                DayLabel::Weekday(_) if axis.anchor_row(&block.interval()).is_some() => {
                    placeable.push(block);
                    continue;
                }
                DayLabel::Weekday(_) => {
                    warn!(
                        course = %block.course,
                        start = %block.start_time,
                        end = %block.end_time,
                        "block touches no axis row"
                    );
                    UnplacedReason::OffAxis
                }
                DayLabel::Saturday => UnplacedReason::Saturday,
                DayLabel::Unrecognized(raw) => {
                    warn!(course = %block.course, day = %raw, "unrecognized day label");
                    UnplacedReason::UnrecognizedDay
                }
            };
            unplaced.push(UnplacedBlock {
                block: block.clone(),
                reason,
            });
        }

        let plans: Vec<DayPlan> = Weekday::ALL
            .iter()
            .map(|&day| DayPlan::new(cluster_day(placeable.iter().copied(), day), axis))
            .collect();
        for (day, plan) in Weekday::ALL.iter().zip(&plans) {
            if !plan.clusters.is_empty() {
                debug!(
                    day = day.label(),
                    clusters = plan.clusters.len(),
                    collisions = plan.clusters.iter().filter(|c| c.is_collision()).count(),
                    "clustered day"
                );
            }
        }

        let mut rendered_blocks: HashSet<BlockKey> = HashSet::new();
        let mut rendered_clusters: Vec<Vec<bool>> = plans
            .iter()
            .map(|p| vec![false; p.clusters.len()])
            .collect();

        let rows = axis
            .instants()
            .iter()
            .enumerate()
            .map(|(row, &instant)| {
                let cells = std::array::from_fn(|d| {
                    let plan = &plans[d];
                    let done = &mut rendered_clusters[d];
                    plan.cell_at(row, instant, done, &mut rendered_blocks)
                });
                GridRow {
                    instant,
                    label: axis.row_label(row),
                    cells,
                }
            })
            .collect();

        Grid {
            rows,
            unplaced,
            granularity: axis.granularity(),
        }
    }
}

/// Materializes a candidate on the default school-day axis.
pub fn materialize(candidate: &ScheduleCandidate) -> Grid {
    GridBuilder::new().build(candidate)
}

/// Precomputed clusters of one weekday.
struct DayPlan {
    clusters: Vec<CollisionCluster>,
    anchors: Vec<Option<usize>>,
    spans: Vec<usize>,
}

impl DayPlan {
    fn new(clusters: Vec<CollisionCluster>, axis: &TimeAxis) -> Self {
        let anchors = clusters.iter().map(|c| axis.anchor_row(&c.extent())).collect();
        let spans = clusters.iter().map(|c| axis.row_span(&c.extent())).collect();
        Self {
            clusters,
            anchors,
            spans,
        }
    }

    fn cell_at(
        &self,
        row: usize,
        instant: u32,
        done: &mut [bool],
        rendered: &mut HashSet<BlockKey>,
    ) -> Cell {
        let anchored = (0..self.clusters.len()).find(|&i| !done[i] && self.anchors[i] == Some(row));

        if let Some(i) = anchored {
            done[i] = true;
            let cluster = &self.clusters[i];
            for m in cluster.members() {
                rendered.insert(m.key.clone());
            }
            if cluster.is_collision() {
                return Cell::Collision(CollisionCell {
                    cluster: cluster.clone(),
                    columns: assign_columns(cluster),
                    span: self.spans[i],
                });
            }
            let only = &cluster.members()[0];
            return Cell::Single(SingleCell {
                block: only.block.clone(),
                interval: only.interval,
                span: self.spans[i],
            });
        }

        let mut touching = self
            .clusters
            .iter()
            .flat_map(|c| c.members())
            .filter(|m| m.interval.contains(instant))
            .peekable();

        if touching.peek().is_none() {
            Cell::Empty
        } else {
            debug_assert!(touching.all(|m| rendered.contains(&m.key)));
            Cell::Covered
        }
    }
}
