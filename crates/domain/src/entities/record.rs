//! Common shape of records persisted in the hosted entity store

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::value_objects::RecordId;

/// A record type stored as a named entity collection
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection name on the wire (e.g. `"ComplianceItem"`)
    const ENTITY_NAME: &'static str;

    /// Store-assigned identifier, absent before creation
    fn id(&self) -> Option<&RecordId>;
}

/// Deserialize an optional value, treating `""` and `null` as absent
///
/// Form-backed records are saved with empty strings for unanswered selects.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Deserialize a list, treating `null` as empty
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
