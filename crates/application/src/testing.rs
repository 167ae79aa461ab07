//! Test doubles shared by service tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use domain::{Record, RecordId};
use parking_lot::Mutex;
use serde_json::Value;

use crate::error::ApplicationError;
use crate::ports::{EntityGatewayPort, FilterPredicate, RecordPatch, SortSpec};

/// Gateway over an in-memory vector that records every write
#[derive(Debug)]
pub struct FakeGateway<T> {
    records: Mutex<Vec<T>>,
    creates: Mutex<Vec<RecordPatch>>,
    updates: Mutex<Vec<(RecordId, RecordPatch)>>,
    fail: AtomicBool,
    next_id: AtomicUsize,
}

impl<T: Record> FakeGateway<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            creates: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            next_id: AtomicUsize::new(1),
        }
    }

    pub fn failing() -> Self {
        let gateway = Self::new(Vec::new());
        gateway.set_failing(true);
        gateway
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<T> {
        self.records.lock().clone()
    }

    pub fn creates(&self) -> Vec<RecordPatch> {
        self.creates.lock().clone()
    }

    pub fn updates(&self) -> Vec<(RecordId, RecordPatch)> {
        self.updates.lock().clone()
    }

    fn check(&self) -> Result<(), ApplicationError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(ApplicationError::Gateway("store unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

fn to_value<T: Record>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

fn from_value<T: Record>(value: Value) -> Result<T, ApplicationError> {
    serde_json::from_value(value).map_err(|e| ApplicationError::Internal(e.to_string()))
}

#[async_trait]
impl<T: Record> EntityGatewayPort<T> for FakeGateway<T> {
    async fn list(&self, _sort: Option<&SortSpec>) -> Result<Vec<T>, ApplicationError> {
        self.check()?;
        Ok(self.records())
    }

    async fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<T>, ApplicationError> {
        self.check()?;
        Ok(self
            .records()
            .into_iter()
            .filter(|r| predicate.matches(&to_value(r)))
            .collect())
    }

    async fn create(&self, fields: &RecordPatch) -> Result<T, ApplicationError> {
        self.check()?;
        let id = format!("fake-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let record: T = from_value(fields.clone().set("id", id).into_value())?;
        self.creates.lock().push(fields.clone());
        self.records.lock().push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &RecordId, fields: &RecordPatch) -> Result<T, ApplicationError> {
        self.check()?;
        let mut records = self.records.lock();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == Some(id))
            .ok_or_else(|| ApplicationError::NotFound(id.to_string()))?;

        let mut value = to_value(slot);
        if let Value::Object(map) = &mut value {
            for (key, field) in fields.fields() {
                map.insert(key.clone(), field.clone());
            }
        }
        let updated: T = from_value(value)?;
        *slot = updated.clone();
        drop(records);

        self.updates.lock().push((id.clone(), fields.clone()));
        Ok(updated)
    }
}
