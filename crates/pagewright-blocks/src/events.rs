//! Editor Event Journal
//!
//! Every committed mutation of a [`crate::editor::BlockEditor`] is recorded
//! here with a sequence number. The admin uses the journal for its activity
//! log and to decide whether a page has unsaved changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::block::{Block, BlockId};

/// Editor event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorEventType {
    /// Block inserted from the palette
    BlockAdded,
    /// Block fields changed
    BlockUpdated,
    /// Block removed
    BlockDeleted,
    /// Block moved to a new position
    BlockMoved,
    /// Drag ended without a drop target
    MoveCancelled,
}

impl EditorEventType {
    /// Get the string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlockAdded => "block_added",
            Self::BlockUpdated => "block_updated",
            Self::BlockDeleted => "block_deleted",
            Self::BlockMoved => "block_moved",
            Self::MoveCancelled => "move_cancelled",
        }
    }

    /// Check if the event changed the sequence
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::MoveCancelled)
    }
}

impl std::fmt::Display for EditorEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded editor event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorEvent {
    /// Unique event identifier
    pub id: Uuid,

    /// Sequence number within the editing session, starting at 1
    pub sequence_num: u64,

    /// Event type
    pub event_type: EditorEventType,

    /// Event-specific payload
    pub payload: Value,

    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl EditorEvent {
    /// Create a new event
    #[must_use]
    pub fn new(sequence_num: u64, event_type: EditorEventType) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence_num,
            event_type,
            payload: serde_json::json!({}),
            timestamp: Utc::now(),
        }
    }

    /// Set the payload
    #[must_use]
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}

// ============================================================================
// Event Payloads
// ============================================================================

/// Payload for block added event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockAddedPayload {
    /// New block ID
    pub block_id: BlockId,
    /// Type tag requested from the palette
    pub block_type: String,
    /// Index the block was inserted at
    pub index: usize,
}

/// Payload for block updated event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockUpdatedPayload {
    /// Block ID
    pub block_id: BlockId,
    /// Names of the fields that were patched
    pub fields: Vec<String>,
}

/// Payload for block deleted event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDeletedPayload {
    /// The deleted block (for undo)
    pub block: Block,
    /// Index where block was located
    pub index: usize,
}

/// Payload for block moved event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockMovedPayload {
    /// Block ID
    pub block_id: BlockId,
    /// Previous index
    pub from_index: usize,
    /// New index
    pub to_index: usize,
}

// ============================================================================
// Event Recording
// ============================================================================

/// In-memory journal owned by one editor
#[derive(Debug)]
pub struct EventJournal {
    next_sequence: u64,
    events: Vec<EditorEvent>,
}

impl EventJournal {
    /// Create an empty journal
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_sequence: 1,
            events: Vec::new(),
        }
    }

    /// Record an event and return its sequence number
    pub fn record(&mut self, event_type: EditorEventType, payload: impl Serialize) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;

        let payload = match serde_json::to_value(payload) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    sequence_num = seq,
                    event_type = event_type.as_str(),
                    error = %e,
                    "event payload could not be serialized"
                );
                Value::Null
            }
        };
        self.events
            .push(EditorEvent::new(seq, event_type).with_payload(payload));
        seq
    }

    /// All recorded events, oldest first
    #[must_use]
    pub fn events(&self) -> &[EditorEvent] {
        &self.events
    }

    /// Events recorded after the given sequence number
    #[must_use]
    pub fn since(&self, sequence_num: u64) -> &[EditorEvent] {
        let start = self
            .events
            .partition_point(|e| e.sequence_num <= sequence_num);
        &self.events[start..]
    }

    /// Sequence number of the newest event, 0 if empty
    #[must_use]
    pub fn last_sequence(&self) -> u64 {
        self.events.last().map_or(0, |e| e.sequence_num)
    }

    /// Number of recorded mutations
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| e.event_type.is_mutation())
            .count()
    }

    /// Get the number of events
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if no events were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventJournal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_as_str() {
        assert_eq!(EditorEventType::BlockAdded.as_str(), "block_added");
        assert_eq!(EditorEventType::MoveCancelled.to_string(), "move_cancelled");
    }

    #[test]
    fn test_is_mutation() {
        assert!(EditorEventType::BlockMoved.is_mutation());
        assert!(!EditorEventType::MoveCancelled.is_mutation());
    }

    #[test]
    fn test_journal_sequence_numbers() {
        let mut journal = EventJournal::new();
        let first = journal.record(
            EditorEventType::BlockMoved,
            BlockMovedPayload {
                block_id: BlockId::from("a"),
                from_index: 0,
                to_index: 2,
            },
        );
        let second = journal.record(EditorEventType::MoveCancelled, serde_json::json!({}));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(journal.last_sequence(), 2);
        assert_eq!(journal.mutation_count(), 1);
        assert_eq!(journal.events()[0].payload["to_index"], 2);
    }

    #[test]
    fn test_unserializable_payload_records_null() {
        let mut journal = EventJournal::new();
        let mut payload = std::collections::BTreeMap::new();
        payload.insert(vec![1u8], 1u8);

        let seq = journal.record(EditorEventType::BlockUpdated, payload);
        assert_eq!(seq, 1);
        assert!(journal.events()[0].payload.is_null());
    }

    #[test]
    fn test_journal_since() {
        let mut journal = EventJournal::default();
        for _ in 0..3 {
            journal.record(EditorEventType::MoveCancelled, serde_json::json!({}));
        }
        assert_eq!(journal.since(0).len(), 3);
        assert_eq!(journal.since(2).len(), 1);
        assert!(journal.since(3).is_empty());
    }
}
