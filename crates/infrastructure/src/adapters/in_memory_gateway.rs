//! In-memory entity gateway
//!
//! Keeps records as JSON objects with a `created_date` stamp, so sorting and
//! filtering behave like the hosted store. Used for demo mode and tests.

use std::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    sync::{
        Arc,
        atomic::{AtomicI64, Ordering as AtomicOrdering},
    },
};

use application::{
    ApplicationError,
    ports::{EntityGatewayPort, FilterPredicate, RecordPatch, STORE_MANAGED_FIELDS, SortSpec},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use domain::{EmailAddress, Record, RecordId};
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

const CREATED_DATE: &str = "created_date";
const CREATED_BY: &str = "created_by";

/// Gateway over a shared in-memory collection
pub struct InMemoryEntityGateway<T> {
    records: Arc<RwLock<Vec<Map<String, Value>>>>,
    epoch: DateTime<Utc>,
    sequence: Arc<AtomicI64>,
    /// Stamped as `created_by` on create, the way the store does for the session user
    creator: Option<String>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for InMemoryEntityGateway<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            epoch: self.epoch,
            sequence: Arc::clone(&self.sequence),
            creator: self.creator.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> fmt::Debug for InMemoryEntityGateway<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryEntityGateway")
            .field("entity", &T::ENTITY_NAME)
            .field("records", &self.records.read().len())
            .finish_non_exhaustive()
    }
}

impl<T: Record> Default for InMemoryEntityGateway<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryEntityGateway<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            epoch: Utc::now(),
            sequence: Arc::new(AtomicI64::new(0)),
            creator: None,
            _record: PhantomData,
        }
    }

    /// Stamp records created through this gateway with the given owner
    #[must_use]
    pub fn with_creator(mut self, creator: &EmailAddress) -> Self {
        self.creator = Some(creator.as_str().to_string());
        self
    }

    /// Gateway holding the given records, stamped oldest first
    pub fn seeded(records: Vec<T>) -> Result<Self, ApplicationError> {
        let gateway = Self::new();
        {
            let mut stored = gateway.records.write();
            for record in &records {
                let mut fields = to_object(record)?;
                fields.insert(CREATED_DATE.to_string(), gateway.next_stamp());
                stored.push(fields);
            }
        }
        Ok(gateway)
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Strictly increasing creation time, one millisecond apart
    fn next_stamp(&self) -> Value {
        let n = self.sequence.fetch_add(1, AtomicOrdering::SeqCst);
        let stamp = self.epoch + Duration::milliseconds(n);
        Value::String(stamp.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    fn decode(fields: &Map<String, Value>) -> Result<T, ApplicationError> {
        serde_json::from_value(Value::Object(fields.clone())).map_err(|e| {
            ApplicationError::Internal(format!("Stored {} is invalid: {e}", T::ENTITY_NAME))
        })
    }
}

fn to_object<T: Record>(record: &T) -> Result<Map<String, Value>, ApplicationError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(ApplicationError::Internal(format!(
            "{} did not serialize to an object",
            T::ENTITY_NAME
        ))),
        Err(e) => Err(ApplicationError::Internal(e.to_string())),
    }
}

/// Order two field values; absent and null sort first
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl<T: Record> EntityGatewayPort<T> for InMemoryEntityGateway<T> {
    async fn list(&self, sort: Option<&SortSpec>) -> Result<Vec<T>, ApplicationError> {
        let mut records = self.records.read().clone();
        if let Some(sort) = sort {
            records.sort_by(|a, b| {
                let ordering = compare_values(a.get(sort.field()), b.get(sort.field()));
                if sort.is_descending() {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        records.iter().map(Self::decode).collect()
    }

    async fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<T>, ApplicationError> {
        self.records
            .read()
            .iter()
            .filter(|fields| predicate.matches(&Value::Object((*fields).clone())))
            .map(Self::decode)
            .collect()
    }

    async fn create(&self, fields: &RecordPatch) -> Result<T, ApplicationError> {
        let mut stored = fields.fields().clone();
        for field in STORE_MANAGED_FIELDS {
            stored.remove(field);
        }
        if let Some(creator) = &self.creator {
            stored.insert(CREATED_BY.to_string(), Value::String(creator.clone()));
        }
        let id = format!("{}_{}", T::ENTITY_NAME.to_lowercase(), Uuid::new_v4().simple());
        stored.insert("id".to_string(), Value::String(id.clone()));
        stored.insert(CREATED_DATE.to_string(), self.next_stamp());

        let record = Self::decode(&stored)?;
        self.records.write().push(stored);
        debug!(entity = T::ENTITY_NAME, id = %id, "Record created");
        Ok(record)
    }

    async fn update(&self, id: &RecordId, fields: &RecordPatch) -> Result<T, ApplicationError> {
        let mut records = self.records.write();
        let stored = records
            .iter_mut()
            .find(|r| r.get("id").and_then(Value::as_str) == Some(id.as_str()))
            .ok_or_else(|| ApplicationError::NotFound(format!("{} {id}", T::ENTITY_NAME)))?;

        let mut merged = stored.clone();
        for (key, value) in fields.fields() {
            merged.insert(key.clone(), value.clone());
        }
        let record = Self::decode(&merged)?;
        *stored = merged;
        Ok(record)
    }
}
