use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogsPublisher writes every domain event as a structured log record.
#[derive(Debug, Default)]
pub struct LogsPublisher {}

impl LogsPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl EventPublisher for LogsPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let json = serde_json::to_string(event)?;
        tracing::info!(event_id = %event.event_id, name = %event.name, group = %event.group, key = %event.key,
            kind = ?event.kind, event = %json, "domain event");
        Ok(())
    }
}
