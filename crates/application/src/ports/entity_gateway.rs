//! Entity gateway port - CRUD access to records in the hosted entity store

use std::fmt;

use async_trait::async_trait;
use domain::{EmailAddress, Record, RecordId};
use serde_json::{Map, Value};

use crate::error::ApplicationError;

/// Sort order for `list`: a field name, `-` prefixed for descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    field: String,
    descending: bool,
}

impl SortSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    /// Newest first, as used for every dashboard collection
    #[must_use]
    pub fn newest_first() -> Self {
        Self::descending("created_date")
    }

    /// Parse the wire form (`"-created_date"`)
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        spec.strip_prefix('-')
            .map_or_else(|| Self::ascending(spec), Self::descending)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub const fn is_descending(&self) -> bool {
        self.descending
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            f.write_str(&self.field)
        }
    }
}

/// Equality predicate over record fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPredicate {
    fields: Map<String, Value>,
}

impl FilterPredicate {
    /// Match records created by the given user
    #[must_use]
    pub fn created_by(email: &EmailAddress) -> Self {
        Self::default().and("created_by", email.as_str())
    }

    #[must_use]
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Check a serialized record against every equality in the predicate
    pub fn matches(&self, record: &Value) -> bool {
        self.fields
            .iter()
            .all(|(key, expected)| record.get(key) == Some(expected))
    }
}

/// Fields the store stamps itself; never sent on create or update
pub const STORE_MANAGED_FIELDS: [&str; 4] = ["id", "created_by", "created_date", "updated_date"];

/// Set of field values sent on create or update
///
/// Updates are shallow merges: fields not named in the patch are left alone
/// by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPatch {
    fields: Map<String, Value>,
}

impl RecordPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of a record except the ones the store manages
    pub fn from_record<T: Record>(record: &T) -> Result<Self, ApplicationError> {
        match serde_json::to_value(record) {
            Ok(Value::Object(mut fields)) => {
                for field in STORE_MANAGED_FIELDS {
                    fields.remove(field);
                }
                Ok(Self { fields })
            },
            Ok(other) => Err(ApplicationError::Internal(format!(
                "{} did not serialize to an object: {other}",
                T::ENTITY_NAME
            ))),
            Err(e) => Err(ApplicationError::Internal(e.to_string())),
        }
    }

    #[must_use]
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Port for one record collection of the entity store
#[async_trait]
pub trait EntityGatewayPort<T: Record>: Send + Sync {
    /// Every record of the collection, optionally sorted
    async fn list(&self, sort: Option<&SortSpec>) -> Result<Vec<T>, ApplicationError>;

    /// Records matching an equality predicate
    async fn filter(&self, predicate: &FilterPredicate) -> Result<Vec<T>, ApplicationError>;

    /// Create a record from the given fields, returning it with its id
    async fn create(&self, fields: &RecordPatch) -> Result<T, ApplicationError>;

    /// Merge the given fields into an existing record
    async fn update(&self, id: &RecordId, fields: &RecordPatch) -> Result<T, ApplicationError>;
}
