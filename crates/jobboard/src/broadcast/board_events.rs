//! Broadcaster for board change events.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::model::JobId;

/// What changed on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    JobAdded { id: JobId },
    JobUpdated { id: JobId },
    JobDeleted { id: JobId },
    ActiveChanged { id: Option<JobId> },
    DraftChanged,
    /// The whole collection was replaced (import).
    Reloaded { count: usize },
}

impl BoardEvent {
    /// Whether the event reflects a job store mutation (and so a write).
    pub fn is_store_mutation(&self) -> bool {
        matches!(
            self,
            BoardEvent::JobAdded { .. }
                | BoardEvent::JobUpdated { .. }
                | BoardEvent::JobDeleted { .. }
                | BoardEvent::Reloaded { .. }
        )
    }
}

#[derive(Clone)]
pub struct BoardEvents {
    sender: broadcast::Sender<BoardEvent>,
}

impl BoardEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn send(&self, event: BoardEvent) {
        // No active receivers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BoardEvents {
    fn default() -> Self {
        Self::new(256)
    }
}

impl std::fmt::Debug for BoardEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardEvents")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

/// Drains every event currently queued for `rx` without blocking.
///
/// Lagged receivers skip what they missed and keep reading.
pub fn drain(rx: &mut broadcast::Receiver<BoardEvent>) -> Vec<BoardEvent> {
    use broadcast::error::TryRecvError;

    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(n)) => {
                tracing::warn!("Board event receiver lagged, missed {} events", n);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_without_receivers_is_ignored() {
        let events = BoardEvents::default();
        assert_eq!(events.receiver_count(), 0);
        events.send(BoardEvent::DraftChanged);
    }

    #[test]
    fn test_subscribers_see_events_in_order() {
        let events = BoardEvents::default();
        let mut rx = events.subscribe();

        events.send(BoardEvent::JobAdded { id: JobId(1) });
        events.send(BoardEvent::ActiveChanged { id: Some(JobId(1)) });

        assert_eq!(
            drain(&mut rx),
            vec![
                BoardEvent::JobAdded { id: JobId(1) },
                BoardEvent::ActiveChanged { id: Some(JobId(1)) },
            ]
        );
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_lagged_receiver_keeps_latest() {
        let events = BoardEvents::new(2);
        let mut rx = events.subscribe();
        for i in 0..5 {
            events.send(BoardEvent::JobUpdated { id: JobId(i) });
        }
        let received = drain(&mut rx);
        assert_eq!(received.last(), Some(&BoardEvent::JobUpdated { id: JobId(4) }));
    }

    #[test]
    fn test_store_mutation_classification() {
        assert!(BoardEvent::JobDeleted { id: JobId(1) }.is_store_mutation());
        assert!(BoardEvent::Reloaded { count: 0 }.is_store_mutation());
        assert!(!BoardEvent::DraftChanged.is_store_mutation());
        assert!(!BoardEvent::ActiveChanged { id: None }.is_store_mutation());
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_value(BoardEvent::JobAdded { id: JobId(9) }).unwrap();
        assert_eq!(json["type"], "job_added");
        assert_eq!(json["id"], 9);
    }
}
