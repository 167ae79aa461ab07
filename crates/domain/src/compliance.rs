//! Progress and ordering derived from a list of compliance items
//!
//! Pure functions over fetched items; nothing here talks to the store.

use std::cmp::Reverse;

use serde::Serialize;

use crate::entities::ComplianceItem;
use crate::value_objects::{Priority, TaskStatus};

/// Number of roadmap checkpoints surfaced on the dashboard
pub const CHECKPOINT_COUNT: usize = 5;

/// Overview tile counts
///
/// Buckets are independent filters, not a partition: a critical item that
/// is in progress counts in both `critical` and `in_progress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub critical: usize,
    pub high: usize,
    pub completed: usize,
    pub in_progress: usize,
}

#[must_use]
pub fn status_counts(items: &[ComplianceItem]) -> StatusCounts {
    StatusCounts {
        critical: items.iter().filter(|i| i.priority == Priority::Critical).count(),
        high: items.iter().filter(|i| i.priority == Priority::High).count(),
        completed: completed_count(items),
        in_progress: items
            .iter()
            .filter(|i| i.status == TaskStatus::InProgress)
            .count(),
    }
}

#[must_use]
pub fn completed_count(items: &[ComplianceItem]) -> usize {
    items.iter().filter(|i| i.is_completed()).count()
}

#[must_use]
pub fn pending_count(items: &[ComplianceItem]) -> usize {
    items
        .iter()
        .filter(|i| i.status == TaskStatus::Pending)
        .count()
}

/// Critical items that are not yet completed
#[must_use]
pub fn outstanding_critical_count(items: &[ComplianceItem]) -> usize {
    items
        .iter()
        .filter(|i| i.is_critical() && !i.is_completed())
        .count()
}

/// Share of completed items, rounded to the nearest whole percent
///
/// Returns 0 for an empty list.
#[must_use]
pub fn progress_percentage(items: &[ComplianceItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let total = items.len();
    // half-up rounding in integer arithmetic
    let percent = (completed_count(items) * 100 + total / 2) / total;
    u8::try_from(percent).unwrap_or(100)
}

/// Roadmap ordering: incomplete before completed, then by descending priority
///
/// The sort is stable, so equal keys keep their input order.
#[must_use]
pub fn roadmap_order(items: &[ComplianceItem]) -> Vec<&ComplianceItem> {
    let mut ordered: Vec<&ComplianceItem> = items.iter().collect();
    ordered.sort_by_key(|i| (i.is_completed(), Reverse(i.priority.rank())));
    ordered
}

/// First [`CHECKPOINT_COUNT`] items of the roadmap
#[must_use]
pub fn roadmap_checkpoints(items: &[ComplianceItem]) -> Vec<&ComplianceItem> {
    let mut ordered = roadmap_order(items);
    ordered.truncate(CHECKPOINT_COUNT);
    ordered
}

/// First critical item, in input order, that still needs doing
#[must_use]
pub fn urgent_item(items: &[ComplianceItem]) -> Option<&ComplianceItem> {
    items.iter().find(|i| i.is_critical() && !i.is_completed())
}

/// Everything the dashboard derives from the item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceSummary<'a> {
    pub total: usize,
    pub counts: StatusCounts,
    pub progress_percentage: u8,
    pub checkpoints: Vec<&'a ComplianceItem>,
    pub urgent_item: Option<&'a ComplianceItem>,
}

impl<'a> ComplianceSummary<'a> {
    #[must_use]
    pub fn from_items(items: &'a [ComplianceItem]) -> Self {
        Self {
            total: items.len(),
            counts: status_counts(items),
            progress_percentage: progress_percentage(items),
            checkpoints: roadmap_checkpoints(items),
            urgent_item: urgent_item(items),
        }
    }
}
