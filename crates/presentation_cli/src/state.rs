//! Application state: services wired to their adapters

use std::{fmt, sync::Arc};

use ai_core::HostedInferenceEngine;
use anyhow::Context;
use application::{
    ChatVariant, ChatWidget, DashboardService, ProfileService, SessionLoader, TaskBoard,
    ports::{AssistantPort, EntityGatewayPort, SessionPort},
};
use chrono::NaiveDate;
use domain::{BusinessProfile, ComplianceItem, LegalUpdate, WarningItem};
use infrastructure::{
    AppConfig, ChatAppConfig, EntityStoreGateway, EntityStoreSession, InMemoryEntityGateway,
    InferenceAssistantAdapter, StaticSession, demo,
};
use integration_entity_store::{EntityStoreClient, HttpEntityStoreClient};
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: SessionLoader,
    pub profiles: ProfileService,
    pub dashboard: DashboardService,
    pub items: Arc<dyn EntityGatewayPort<ComplianceItem>>,
    pub updates: Arc<dyn EntityGatewayPort<LegalUpdate>>,
    pub assistant: Arc<dyn AssistantPort>,
    pub chat: ChatAppConfig,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("chat", &self.chat)
            .finish_non_exhaustive()
    }
}

struct Gateways {
    session: Arc<dyn SessionPort>,
    profiles: Arc<dyn EntityGatewayPort<BusinessProfile>>,
    items: Arc<dyn EntityGatewayPort<ComplianceItem>>,
    updates: Arc<dyn EntityGatewayPort<LegalUpdate>>,
    warnings: Arc<dyn EntityGatewayPort<WarningItem>>,
}

impl AppState {
    /// State backed by the hosted entity store and LLM endpoint
    pub fn remote(config: &AppConfig) -> anyhow::Result<Self> {
        let client: Arc<dyn EntityStoreClient> = Arc::new(
            HttpEntityStoreClient::new(config.entity_store.clone())
                .context("Failed to create entity store client")?,
        );
        let gateways = Gateways {
            session: Arc::new(EntityStoreSession::new(Arc::clone(&client))),
            profiles: Arc::new(EntityStoreGateway::<BusinessProfile>::new(Arc::clone(&client))),
            items: Arc::new(EntityStoreGateway::<ComplianceItem>::new(Arc::clone(&client))),
            updates: Arc::new(EntityStoreGateway::<LegalUpdate>::new(Arc::clone(&client))),
            warnings: Arc::new(EntityStoreGateway::<WarningItem>::new(client)),
        };

        info!(base_url = %config.entity_store.base_url, "Using hosted entity store");
        Self::assemble(gateways, config)
    }

    /// State backed by in-memory sample data
    ///
    /// Changes last only as long as the process.
    pub fn demo(config: &AppConfig, today: NaiveDate) -> anyhow::Result<Self> {
        let user = demo::demo_user().context("Invalid demo user")?;
        let profiles = InMemoryEntityGateway::seeded(vec![demo::business_profile(&user.email)])?
            .with_creator(&user.email);

        let gateways = Gateways {
            session: Arc::new(StaticSession::signed_in(user)),
            profiles: Arc::new(profiles),
            items: Arc::new(InMemoryEntityGateway::seeded(demo::compliance_items())?),
            updates: Arc::new(InMemoryEntityGateway::seeded(demo::legal_updates(today))?),
            warnings: Arc::new(InMemoryEntityGateway::seeded(demo::warnings())?),
        };

        info!("Using built-in demo data");
        Self::assemble(gateways, config)
    }

    fn assemble(gateways: Gateways, config: &AppConfig) -> anyhow::Result<Self> {
        let engine = HostedInferenceEngine::new(config.inference.clone())
            .context("Failed to create assistant client")?;
        let assistant = InferenceAssistantAdapter::new(Arc::new(engine))
            .with_structured_suggestions(config.inference.structured_suggestions);

        Ok(Self::from_parts(gateways, Arc::new(assistant), config.chat.clone()))
    }

    fn from_parts(
        gateways: Gateways,
        assistant: Arc<dyn AssistantPort>,
        chat: ChatAppConfig,
    ) -> Self {
        let profiles = ProfileService::new(gateways.profiles);
        Self {
            session: SessionLoader::new(gateways.session, profiles.clone()),
            dashboard: DashboardService::new(
                Arc::clone(&gateways.items),
                Arc::clone(&gateways.updates),
                gateways.warnings,
            ),
            profiles,
            items: gateways.items,
            updates: gateways.updates,
            assistant,
            chat,
        }
    }

    pub fn task_board(&self) -> TaskBoard {
        TaskBoard::new(Arc::clone(&self.items))
    }

    /// A fresh chat widget
    pub fn chat_widget(&self, variant: ChatVariant, context: Option<BusinessProfile>) -> ChatWidget {
        ChatWidget::new(variant, Arc::clone(&self.assistant)).with_context(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[tokio::test]
    async fn demo_state_lands_on_dashboard() {
        let state = AppState::demo(&AppConfig::default(), today()).unwrap();
        let context = state.session.load().await.unwrap();

        assert_eq!(context.landing(), application::Landing::Dashboard);
        assert_eq!(
            context.profile().map(BusinessProfile::display_name),
            Some("Darwin Auto Repairs")
        );
    }

    #[tokio::test]
    async fn demo_dashboard_is_populated() {
        let state = AppState::demo(&AppConfig::default(), today()).unwrap();
        let data = state.dashboard.fetch().await.unwrap();

        assert_eq!(data.items.len(), 10);
        assert_eq!(data.recent_updates().len(), 3);
        assert_eq!(data.recent_updates()[0].id.as_str(), "lu_right_to_repair");
        assert_eq!(data.warnings_tile().len(), 4);
    }

    #[tokio::test]
    async fn demo_onboarding_after_reset_keeps_one_profile() {
        let state = AppState::demo(&AppConfig::default(), today()).unwrap();
        let context = state.session.load().await.unwrap();
        let profile = context.profile().cloned().unwrap();
        state.profiles.reset_onboarding(&profile).await.unwrap();

        let saved = state
            .profiles
            .upsert_for_user(context.user(), None, &profile)
            .await
            .unwrap();
        assert_eq!(saved.id, profile.id);

        let reloaded = state.session.load().await.unwrap();
        assert_eq!(reloaded.profile().and_then(|p| p.id.clone()), profile.id);
        assert_eq!(
            reloaded.profile().and_then(|p| p.created_by.clone()),
            Some(context.user().email.clone())
        );
    }

    #[test]
    fn remote_state_builds_from_defaults() {
        assert!(AppState::remote(&AppConfig::default()).is_ok());
    }
}
