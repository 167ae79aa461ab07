//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod assistant_adapter;
mod entity_store_gateway;
mod entity_store_session;
mod in_memory_gateway;
mod static_session;

pub use assistant_adapter::InferenceAssistantAdapter;
pub use entity_store_gateway::EntityStoreGateway;
pub use entity_store_session::EntityStoreSession;
pub use in_memory_gateway::InMemoryEntityGateway;
pub use static_session::StaticSession;

use application::ApplicationError;
use integration_entity_store::EntityStoreError;

/// Map entity store failures onto application errors
pub(crate) fn map_store_error(err: EntityStoreError) -> ApplicationError {
    match err {
        EntityStoreError::NotAuthenticated(msg) => ApplicationError::NotAuthenticated(msg),
        EntityStoreError::NotFound(msg) => ApplicationError::NotFound(msg),
        other => ApplicationError::Gateway(other.to_string()),
    }
}
