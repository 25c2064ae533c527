use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        self.events.lock()
            .map(|events| events.clone())
            .map_err(|err| LibraryError::runtime(format!("events lock poisoned {:?}", err).as_str(), None))
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        let mut events = self.events.lock()
            .map_err(|err| LibraryError::runtime(format!("events lock poisoned {:?}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_share_published_events() {
        let publisher = MemoryPublisher::new();
        let observer = publisher.clone();
        let _ = publisher.publish(&DomainEvent::deleted("books", "main", "4", &4).expect("build event")).await.expect("should publish");
        let events = observer.events().expect("should read events");
        assert_eq!(1, events.len());
        assert_eq!(DomainEventType::Deleted, events[0].kind);
    }
}
