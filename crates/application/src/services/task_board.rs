//! Task board - filterable list of compliance items with status changes

use std::{fmt, sync::Arc, time::Duration};

use domain::{AustralianState, ComplianceItem, Priority, RecordId, TaskStatus, compliance};
use tracing::{error, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{EntityGatewayPort, RecordPatch},
};

/// How long a deep-linked task stays highlighted
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(2500);

/// Tab selection on the task board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    InProgress,
    Completed,
    Priority(Priority),
}

impl TaskFilter {
    pub fn matches(&self, item: &ComplianceItem) -> bool {
        match self {
            Self::All => true,
            Self::Pending => item.status == TaskStatus::Pending,
            Self::InProgress => item.status == TaskStatus::InProgress,
            Self::Completed => item.status == TaskStatus::Completed,
            Self::Priority(priority) => item.priority == *priority,
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(Self::All),
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => other.parse().map(Self::Priority),
        }
    }
}

/// Counts shown on the board's tabs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabCounts {
    pub all: usize,
    /// Critical and not yet completed
    pub critical: usize,
    pub pending: usize,
    pub completed: usize,
}

/// A deep-linked task to scroll to and highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFocus {
    /// Position in the filtered list
    pub position: usize,
    pub highlight_for: Duration,
}

/// Compliance items as shown on the tasks page
pub struct TaskBoard {
    gateway: Arc<dyn EntityGatewayPort<ComplianceItem>>,
    items: Vec<ComplianceItem>,
    filter: TaskFilter,
}

impl fmt::Debug for TaskBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskBoard")
            .field("items", &self.items.len())
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl TaskBoard {
    pub fn new(gateway: Arc<dyn EntityGatewayPort<ComplianceItem>>) -> Self {
        Self {
            gateway,
            items: Vec::new(),
            filter: TaskFilter::All,
        }
    }

    /// Board over items that were already fetched
    pub fn with_items(
        gateway: Arc<dyn EntityGatewayPort<ComplianceItem>>,
        items: Vec<ComplianceItem>,
    ) -> Self {
        Self {
            gateway,
            items,
            filter: TaskFilter::All,
        }
    }

    /// Fetch the items; on failure the board keeps what it had
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), ApplicationError> {
        match self.gateway.list(None).await {
            Ok(items) => {
                self.items = items;
                Ok(())
            },
            Err(e) => {
                error!(error = %e, "Error loading compliance items");
                Err(e)
            },
        }
    }

    pub fn items(&self) -> &[ComplianceItem] {
        &self.items
    }

    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Items passing the current filter, in fetch order
    pub fn filtered(&self) -> Vec<&ComplianceItem> {
        self.items.iter().filter(|i| self.filter.matches(i)).collect()
    }

    pub fn tab_counts(&self) -> TabCounts {
        TabCounts {
            all: self.items.len(),
            critical: compliance::outstanding_critical_count(&self.items),
            pending: compliance::pending_count(&self.items),
            completed: compliance::completed_count(&self.items),
        }
    }

    pub fn progress_percentage(&self) -> u8 {
        compliance::progress_percentage(&self.items)
    }

    /// Change an item's status, writing to the store before the local copy
    ///
    /// On failure the error is logged and the local item is left unchanged.
    #[instrument(skip(self), fields(id = %id, status = %status))]
    pub async fn set_status(
        &mut self,
        id: &RecordId,
        status: TaskStatus,
    ) -> Result<(), ApplicationError> {
        let patch = RecordPatch::new().set("status", status.code());
        if let Err(e) = self.gateway.update(id, &patch).await {
            error!(error = %e, "Error updating item status");
            return Err(e);
        }

        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.status = status;
        }
        info!("Item status updated");
        Ok(())
    }

    /// Locate a deep-linked task in the filtered list
    pub fn focus(&self, id: &RecordId) -> Option<TaskFocus> {
        self.filtered()
            .iter()
            .position(|i| &i.id == id)
            .map(|position| TaskFocus {
                position,
                highlight_for: HIGHLIGHT_DURATION,
            })
    }
}

/// Item applies in the state, either by name or through `ALL`
pub fn is_state_relevant(item: &ComplianceItem, state: Option<AustralianState>) -> bool {
    state.is_some_and(|s| item.applies_in(s))
}
