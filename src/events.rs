use std::fmt;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshEventKind {
    Play,
    Stop,
}

impl MeshEventKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MeshEventKind::Play => "play",
            MeshEventKind::Stop => "stop",
        }
    }
}

/// Application-level event emitted by a mesh entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshEvent {
    pub kind: MeshEventKind,
    /// Id of the entity that dispatched the event.
    pub source: Uuid,
}

impl MeshEvent {
    #[must_use]
    pub fn new(kind: MeshEventKind, source: Uuid) -> Self {
        Self { kind, source }
    }
}

impl fmt::Display for MeshEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} source={}", self.kind.name(), self.source)
    }
}

/// Receives events dispatched by mesh entities.
pub trait EventSink {
    fn dispatch(&mut self, event: MeshEvent);
}

impl EventSink for flume::Sender<MeshEvent> {
    fn dispatch(&mut self, event: MeshEvent) {
        if self.send(event).is_err() {
            log::debug!("Event receiver dropped, discarding {event}");
        }
    }
}
