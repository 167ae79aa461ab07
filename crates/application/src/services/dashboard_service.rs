//! Dashboard service - Joint fetch of the dashboard collections

use std::{fmt, sync::Arc};

use domain::{ComplianceItem, ComplianceSummary, LegalUpdate, WarningItem};
use tracing::{debug, error, instrument};

use crate::{
    error::ApplicationError,
    ports::{EntityGatewayPort, SortSpec},
};

/// Updates shown on the dashboard tile
pub const RECENT_UPDATES_COUNT: usize = 3;
/// Warnings shown on the "things to avoid" tile
pub const WARNINGS_TILE_COUNT: usize = 4;

/// Collections backing the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardData {
    pub items: Vec<ComplianceItem>,
    /// Newest first
    pub updates: Vec<LegalUpdate>,
    pub warnings: Vec<WarningItem>,
}

impl DashboardData {
    pub fn summary(&self) -> ComplianceSummary<'_> {
        ComplianceSummary::from_items(&self.items)
    }

    pub fn recent_updates(&self) -> &[LegalUpdate] {
        &self.updates[..self.updates.len().min(RECENT_UPDATES_COUNT)]
    }

    pub fn warnings_tile(&self) -> &[WarningItem] {
        &self.warnings[..self.warnings.len().min(WARNINGS_TILE_COUNT)]
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.updates.is_empty() && self.warnings.is_empty()
    }
}

/// Service loading everything the dashboard shows
#[derive(Clone)]
pub struct DashboardService {
    items: Arc<dyn EntityGatewayPort<ComplianceItem>>,
    updates: Arc<dyn EntityGatewayPort<LegalUpdate>>,
    warnings: Arc<dyn EntityGatewayPort<WarningItem>>,
}

impl fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardService").finish_non_exhaustive()
    }
}

impl DashboardService {
    pub fn new(
        items: Arc<dyn EntityGatewayPort<ComplianceItem>>,
        updates: Arc<dyn EntityGatewayPort<LegalUpdate>>,
        warnings: Arc<dyn EntityGatewayPort<WarningItem>>,
    ) -> Self {
        Self {
            items,
            updates,
            warnings,
        }
    }

    /// Fetch all three collections concurrently
    ///
    /// Any failure fails the whole fetch; no partial data is returned.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<DashboardData, ApplicationError> {
        let newest_first = SortSpec::newest_first();
        let (items, updates, warnings) = tokio::try_join!(
            self.items.list(None),
            self.updates.list(Some(&newest_first)),
            self.warnings.list(None),
        )?;

        debug!(
            items = items.len(),
            updates = updates.len(),
            warnings = warnings.len(),
            "Dashboard data loaded"
        );

        Ok(DashboardData {
            items,
            updates,
            warnings,
        })
    }

    /// Fetch, logging a failure and falling back to empty collections
    pub async fn load(&self) -> DashboardData {
        match self.fetch().await {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "Error loading compliance data");
                DashboardData::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{Priority, RecordId, RiskLevel, TaskStatus, Urgency};

    use super::*;
    use crate::testing::FakeGateway;

    fn update(id: &str) -> LegalUpdate {
        LegalUpdate {
            id: RecordId::from(id),
            title: format!("Update {id}"),
            description: String::new(),
            urgency: Urgency::Medium,
            category: None,
            effective_date: None,
            action_required: false,
            affected_jurisdictions: Vec::new(),
            affected_industries: Vec::new(),
            source_url: None,
        }
    }

    fn warning(id: &str) -> WarningItem {
        WarningItem {
            id: RecordId::from(id),
            title: format!("Warning {id}"),
            description: String::new(),
            risk_level: RiskLevel::High,
            details_link: None,
        }
    }

    fn service(
        items: FakeGateway<ComplianceItem>,
        updates: FakeGateway<LegalUpdate>,
        warnings: FakeGateway<WarningItem>,
    ) -> DashboardService {
        DashboardService::new(Arc::new(items), Arc::new(updates), Arc::new(warnings))
    }

    #[tokio::test]
    async fn loads_all_collections_and_tiles() {
        let items = vec![
            ComplianceItem::new("c1", "ABN", Priority::Critical),
            ComplianceItem::new("c2", "GST", Priority::High).with_status(TaskStatus::Completed),
        ];
        let updates = (1..=5).map(|i| update(&format!("u{i}"))).collect();
        let warnings = (1..=6).map(|i| warning(&format!("w{i}"))).collect();

        let data = service(
            FakeGateway::new(items),
            FakeGateway::new(updates),
            FakeGateway::new(warnings),
        )
        .load()
        .await;

        assert_eq!(data.items.len(), 2);
        assert_eq!(data.recent_updates().len(), RECENT_UPDATES_COUNT);
        assert_eq!(data.recent_updates()[0].id.as_str(), "u1");
        assert_eq!(data.warnings_tile().len(), WARNINGS_TILE_COUNT);
        assert_eq!(data.summary().progress_percentage, 50);
    }

    #[tokio::test]
    async fn one_failure_leaves_everything_empty() {
        let data = service(
            FakeGateway::new(vec![ComplianceItem::new("c1", "ABN", Priority::Critical)]),
            FakeGateway::failing(),
            FakeGateway::new(vec![warning("w1")]),
        )
        .load()
        .await;

        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn fetch_propagates_the_failure() {
        let result = service(
            FakeGateway::failing(),
            FakeGateway::new(Vec::new()),
            FakeGateway::new(Vec::new()),
        )
        .fetch()
        .await;

        assert!(matches!(result, Err(ApplicationError::Gateway(_))));
    }

    #[test]
    fn tiles_handle_short_lists() {
        let data = DashboardData {
            updates: vec![update("u1")],
            ..DashboardData::default()
        };
        assert_eq!(data.recent_updates().len(), 1);
        assert!(data.warnings_tile().is_empty());
    }
}
