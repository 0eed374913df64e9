//! Interval overlap grouping.
//!
//! # Algorithm
//!
//! Incremental clustering in arrival order. Each block is tested against
//! every member of every existing cluster (not just cluster bounds):
//! - no match: start a singleton cluster;
//! - one match: append to that cluster;
//! - several matches: the block bridges them, so the later clusters are
//!   folded into the earliest one before appending.
//!
//! Touching intervals (`a.end == b.start`) do not overlap.
//!
//! # Complexity
//! O(n²) per day, n = blocks on that day (a handful in practice).

use std::collections::HashSet;

use crate::axis::Weekday;
use crate::models::{BlockKey, Interval, TimeBlock};

/// A block placed in a cluster, with its parsed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterMember {
    pub key: BlockKey,
    pub block: TimeBlock,
    pub interval: Interval,
}

/// A maximal set of same-day blocks whose intervals overlap directly or
/// transitively.
///
/// Members keep arrival order; that order is also the column order.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionCluster {
    day: Weekday,
    members: Vec<ClusterMember>,
    extent: Interval,
}

impl CollisionCluster {
    fn singleton(day: Weekday, member: ClusterMember) -> Self {
        Self {
            day,
            extent: member.interval,
            members: vec![member],
        }
    }

    fn push(&mut self, member: ClusterMember) {
        self.extent = self.extent.hull(&member.interval);
        self.members.push(member);
    }

    fn absorb(&mut self, other: CollisionCluster) {
        for m in other.members {
            self.push(m);
        }
    }

    fn overlaps(&self, interval: &Interval) -> bool {
        self.members.iter().any(|m| m.interval.overlaps(interval))
    }

    /// Day of every member.
    #[inline]
    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Members in arrival order.
    #[inline]
    pub fn members(&self) -> &[ClusterMember] {
        &self.members
    }

    /// `[min(start), max(end))` over the members.
    #[inline]
    pub fn extent(&self) -> Interval {
        self.extent
    }

    #[inline]
    pub fn start_min(&self) -> u32 {
        self.extent.start_min
    }

    #[inline]
    pub fn end_min(&self) -> u32 {
        self.extent.end_min
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether this cluster is an actual collision (two or more blocks).
    #[inline]
    pub fn is_collision(&self) -> bool {
        self.members.len() > 1
    }

    /// Whether a block with this key is a member.
    pub fn contains_key(&self, key: &BlockKey) -> bool {
        self.members.iter().any(|m| &m.key == key)
    }
}

/// Partitions the blocks that fall on `day` into collision clusters.
///
/// Blocks on other days are ignored. Repeated enumerations of the same
/// [`BlockKey`] are counted once (first occurrence wins).
pub fn cluster_day<'a>(
    blocks: impl IntoIterator<Item = &'a TimeBlock>,
    day: Weekday,
) -> Vec<CollisionCluster> {
    let mut seen: HashSet<BlockKey> = HashSet::new();
    let mut clusters: Vec<CollisionCluster> = Vec::new();

    for block in blocks {
        if block.day_label().weekday() != Some(day) {
            continue;
        }
        let key = block.key();
        if !seen.insert(key.clone()) {
            continue;
        }
        let member = ClusterMember {
            key,
            interval: block.interval(),
            block: block.clone(),
        };

        let hits: Vec<usize> = clusters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.overlaps(&member.interval))
            .map(|(i, _)| i)
            .collect();

        match hits.split_first() {
            None => clusters.push(CollisionCluster::singleton(day, member)),
            Some((&first, rest)) => {
                // Remove from the back so earlier indices stay valid.
                let mut bridged: Vec<CollisionCluster> =
                    rest.iter().rev().map(|&i| clusters.remove(i)).collect();
                bridged.reverse();
                let target = &mut clusters[first];
                for other in bridged {
                    target.absorb(other);
                }
                target.push(member);
            }
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(course: &str, start: &str, end: &str) -> TimeBlock {
        TimeBlock::new(course, 1, 0, "Lunes", start, end)
    }

    fn sizes(clusters: &[CollisionCluster]) -> Vec<usize> {
        clusters.iter().map(|c| c.len()).collect()
    }

    #[test]
    fn test_overlapping_pair_shares_cluster() {
        // [10,40) and [30,50) minutes past 08:00
        let blocks = vec![block("A", "08:10", "08:40"), block("B", "08:30", "08:50")];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&clusters), vec![2]);
        assert_eq!(clusters[0].extent(), Interval::new(490, 530));
    }

    #[test]
    fn test_touching_blocks_do_not_cluster() {
        let blocks = vec![block("A", "08:10", "08:40"), block("C", "08:40", "09:00")];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&clusters), vec![1, 1]);
        assert!(!clusters[0].is_collision());
    }

    #[test]
    fn test_transitive_chain() {
        // A∩B, B∩C, A and C disjoint
        let blocks = vec![
            block("A", "08:00", "08:20"),
            block("B", "08:10", "08:30"),
            block("C", "08:25", "08:45"),
        ];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&clusters), vec![3]);
        assert_eq!(clusters[0].extent(), Interval::new(480, 525));
    }

    #[test]
    fn test_bridging_block_merges_clusters() {
        // A and C arrive first as separate clusters; B overlaps both.
        let blocks = vec![
            block("A", "08:00", "08:20"),
            block("C", "08:25", "08:45"),
            block("B", "08:10", "08:30"),
        ];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&clusters), vec![3]);
        let order: Vec<&str> = clusters[0]
            .members()
            .iter()
            .map(|m| m.block.course.as_str())
            .collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_identical_intervals_collide() {
        let blocks = vec![block("A", "10:00", "11:00"), block("B", "10:00", "11:00")];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&clusters), vec![2]);
        assert_eq!(clusters[0].members()[0].block.course, "A");
    }

    #[test]
    fn test_duplicates_counted_once() {
        let a = block("A", "08:00", "09:00");
        let blocks = vec![a.clone(), a.clone(), block("B", "10:00", "11:00")];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&clusters), vec![1, 1]);
        assert!(clusters[0].contains_key(&a.key()));
    }

    #[test]
    fn test_other_days_ignored() {
        let blocks = vec![
            block("A", "08:00", "09:00"),
            TimeBlock::new("B", 1, 0, "Martes", "08:00", "09:00"),
        ];
        let monday = cluster_day(&blocks, Weekday::Monday);
        assert_eq!(sizes(&monday), vec![1]);
        assert_eq!(monday[0].day(), Weekday::Monday);
        assert!(cluster_day(&blocks, Weekday::Friday).is_empty());
    }

    #[test]
    fn test_no_cross_cluster_overlap() {
        let blocks = vec![
            block("A", "08:00", "09:00"),
            block("B", "09:00", "10:00"),
            block("C", "08:30", "09:30"),
            block("D", "11:00", "12:00"),
            block("E", "11:30", "11:40"),
        ];
        let clusters = cluster_day(&blocks, Weekday::Monday);
        for (i, a) in clusters.iter().enumerate() {
            for b in clusters.iter().skip(i + 1) {
                for ma in a.members() {
                    for mb in b.members() {
                        assert!(!ma.interval.overlaps(&mb.interval));
                    }
                }
            }
        }
        assert_eq!(sizes(&clusters), vec![3, 2]);
    }
}
