//! Sorting and grouping joined records by board size

use crate::core::{BoardSize, JoinedRecord};
use std::collections::BTreeSet;

/// Joined records sharing one board size, sorted by instance number
#[derive(Debug, Clone, PartialEq)]
pub struct BoardGroup {
    pub size: BoardSize,
    pub records: Vec<JoinedRecord>,
}

/// Sort records by `(height, width, boardnum)` ascending
///
/// The sort is stable, so rows with equal keys keep their join order.
pub fn sort_records(records: &mut [JoinedRecord]) {
    records.sort_by_key(|record| record.key);
}

/// Distinct board sizes in numeric `(height, width)` order
#[must_use]
pub fn board_sizes(records: &[JoinedRecord]) -> Vec<BoardSize> {
    records
        .iter()
        .map(JoinedRecord::board_size)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Split records into one group per board size, in board size order
///
/// Records are sorted first, so each group lists its instances in ascending
/// instance number.
#[must_use]
pub fn group_by_board_size(mut records: Vec<JoinedRecord>) -> Vec<BoardGroup> {
    sort_records(&mut records);

    let mut groups: Vec<BoardGroup> = Vec::new();
    for record in records {
        let size = record.board_size();
        match groups.last_mut() {
            Some(group) if group.size == size => group.records.push(record),
            _ => groups.push(BoardGroup {
                size,
                records: vec![record],
            }),
        }
    }

    for group in &groups {
        log::debug!("Board size {}: {} instances", group.size, group.records.len());
    }

    groups
}
