//! Change notifications.
//!
//! Every mutating operation emits a [`ChangeEvent`] after it commits, so
//! external observers (caches, secondary indexers) can track the store
//! without polling. Sinks run inside the mutating call, in registration
//! order; they see events in the same total order as the mutations.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::model::{OwnerId, RecordId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeEvent {
    Created {
        id: RecordId,
        owner: OwnerId,
        at: DateTime<Utc>,
    },
    Updated {
        id: RecordId,
        owner: OwnerId,
        at: DateTime<Utc>,
    },
    Deleted {
        id: RecordId,
        owner: OwnerId,
        at: DateTime<Utc>,
    },
}

impl ChangeEvent {
    pub fn id(&self) -> RecordId {
        match self {
            Self::Created { id, .. } | Self::Updated { id, .. } | Self::Deleted { id, .. } => *id,
        }
    }

    pub fn owner(&self) -> OwnerId {
        match self {
            Self::Created { owner, .. }
            | Self::Updated { owner, .. }
            | Self::Deleted { owner, .. } => *owner,
        }
    }
}

/// An observer of store mutations.
pub trait EventSink: Send + Sync {
    fn on_event(&self, event: &ChangeEvent);
}

/// An [`EventSink`] that buffers events in memory.
///
/// Useful for tests and for observers that drain events on their own
/// schedule.
#[derive(Default)]
pub struct BufferSink {
    events: Mutex<Vec<ChangeEvent>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return all buffered events.
    pub fn drain(&self) -> Vec<ChangeEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventSink for BufferSink {
    fn on_event(&self, event: &ChangeEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sink_collects_in_order() {
        let sink = BufferSink::new();
        let owner = OwnerId::random();
        let at = Utc::now();

        sink.on_event(&ChangeEvent::Created { id: 0, owner, at });
        sink.on_event(&ChangeEvent::Deleted { id: 0, owner, at });

        let events = sink.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], ChangeEvent::Created { id: 0, .. }));
        assert!(matches!(events[1], ChangeEvent::Deleted { id: 0, .. }));
        assert!(sink.is_empty());
    }

    #[test]
    fn event_accessors() {
        let owner = OwnerId::random();
        let event = ChangeEvent::Updated {
            id: 3,
            owner,
            at: Utc::now(),
        };
        assert_eq!(event.id(), 3);
        assert_eq!(event.owner(), owner);
    }
}
