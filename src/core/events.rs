use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent records a single mutation of the catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Added, data)
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Updated, data)
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Deleted, data)
    }

    fn build<T: Serialize>(name: &str, group: &str, key: &str, kind: DomainEventType, data: &T) -> serde_json::Result<Self> {
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            json_data: serde_json::to_string(data)?,
            created_at: Utc::now().naive_utc(),
        })
    }
}
