//! Record List Operations
//!
//! Mutations applied to the ordered résumé collection. Records are
//! addressed by position, the same index the list view renders them at.

use crate::models::ResumeRecord;

/// Add a record at the end
pub fn append(records: &mut Vec<ResumeRecord>, record: ResumeRecord) {
    records.push(record);
}

/// Remove the record at `index`, keeping the order of the rest
pub fn remove_at(records: &mut Vec<ResumeRecord>, index: usize) -> Option<ResumeRecord> {
    if index < records.len() {
        Some(records.remove(index))
    } else {
        None
    }
}

/// Flip the expanded flag of `index` and collapse every other record.
/// An index past the end collapses everything.
pub fn toggle_expanded(records: &mut [ResumeRecord], index: usize) {
    for (i, record) in records.iter_mut().enumerate() {
        record.expanded = if i == index { !record.expanded } else { false };
    }
}

/// Keep only the first expanded record open. Returns how many were closed.
pub fn collapse_extra_expanded(records: &mut [ResumeRecord]) -> usize {
    let mut seen = false;
    let mut closed = 0;
    for record in records.iter_mut().filter(|r| r.expanded) {
        if seen {
            record.expanded = false;
            closed += 1;
        }
        seen = true;
    }
    closed
}

/// Position of the currently expanded record, if any
pub fn expanded_index(records: &[ResumeRecord]) -> Option<usize> {
    records.iter().position(|r| r.expanded)
}
