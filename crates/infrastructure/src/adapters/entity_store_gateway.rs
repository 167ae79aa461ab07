//! Entity store gateway - Implements EntityGatewayPort over the hosted entity API

use std::{fmt, marker::PhantomData, sync::Arc};

use application::{
    ApplicationError,
    ports::{EntityGatewayPort, FilterPredicate, RecordPatch, SortSpec},
};
use async_trait::async_trait;
use domain::{Record, RecordId};
use integration_entity_store::EntityStoreClient;
use serde_json::Value;
use tracing::{instrument, warn};

use super::map_store_error;

/// Typed gateway for one record type
pub struct EntityStoreGateway<T> {
    client: Arc<dyn EntityStoreClient>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> fmt::Debug for EntityStoreGateway<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStoreGateway")
            .field("entity", &T::ENTITY_NAME)
            .finish_non_exhaustive()
    }
}

impl<T> Clone for EntityStoreGateway<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _record: PhantomData,
        }
    }
}

impl<T: Record> EntityStoreGateway<T> {
    pub fn new(client: Arc<dyn EntityStoreClient>) -> Self {
        Self {
            client,
            _record: PhantomData,
        }
    }

    fn decode(value: Value) -> Result<T, ApplicationError> {
        serde_json::from_value(value).map_err(|e| {
            ApplicationError::Gateway(format!("Malformed {} record: {e}", T::ENTITY_NAME))
        })
    }

    /// Decode a list, skipping records that do not parse
    fn decode_all(values: Vec<Value>) -> Vec<T> {
        values
            .into_iter()
            .filter_map(|value| match Self::decode(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "Skipping record");
                    None
                },
            })
            .collect()
    }
}

#[async_trait]
impl<T: Record> EntityGatewayPort<T> for EntityStoreGateway<T> {
    #[instrument(skip(self), fields(entity = T::ENTITY_NAME))]
    async fn list(&self, sort: Option<&SortSpec>) -> Result<Vec<T>, ApplicationError> {
        let sort = sort.map(ToString::to_string);
        let values = self
            .client
            .list(T::ENTITY_NAME, sort.as_deref())
            .await
            .map_err(map_store_error)?;
        Ok(Self::decode_all(values))
    }

    #[instrument(skip(self, predicate), fields(entity = T::ENTITY_NAME))]
    async fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<T>, ApplicationError> {
        let values = self
            .client
            .filter(T::ENTITY_NAME, predicate.fields())
            .await
            .map_err(map_store_error)?;
        Ok(Self::decode_all(values))
    }

    #[instrument(skip(self, fields), fields(entity = T::ENTITY_NAME))]
    async fn create(&self, fields: &RecordPatch) -> Result<T, ApplicationError> {
        let value = self
            .client
            .create(T::ENTITY_NAME, &fields.clone().into_value())
            .await
            .map_err(map_store_error)?;
        Self::decode(value)
    }

    #[instrument(skip(self, fields), fields(entity = T::ENTITY_NAME, id = %id))]
    async fn update(&self, id: &RecordId, fields: &RecordPatch) -> Result<T, ApplicationError> {
        let value = self
            .client
            .update(T::ENTITY_NAME, id.as_str(), &fields.clone().into_value())
            .await
            .map_err(map_store_error)?;
        Self::decode(value)
    }
}
