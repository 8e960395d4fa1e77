//! Block Ordering Engine
//!
//! [`BlockEditor`] owns the live block sequence of the page being edited and
//! is the only thing that mutates it. Drag and drop is modelled as an
//! explicit two-phase move: [`BlockEditor::begin_move`] opens a pending move,
//! [`BlockEditor::commit_move`] applies it in one step and
//! [`BlockEditor::cancel_move`] drops it. No other mutation is accepted while
//! a move is pending.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::block::{Block, BlockContent, BlockId};
use crate::error::{Error, Result};
use crate::events::{
    BlockAddedPayload, BlockDeletedPayload, BlockMovedPayload, BlockUpdatedPayload,
    EditorEventType, EventJournal,
};
use crate::factory::create_block;
use crate::normalize::normalize_page;

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DragSubject {
    /// A block already in the sequence
    Existing(BlockId),
    /// A palette entry, by type tag
    Palette(String),
}

/// Where the drag ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DropTarget {
    /// Dropped onto an existing block
    Block(BlockId),
    /// Dropped onto the empty canvas
    Canvas,
}

/// Drag state of the editor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// Nothing in flight
    #[default]
    Idle,
    /// A move was started and not yet committed or cancelled
    PendingMove(DragSubject),
}

/// Result of committing a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A palette block was inserted
    Inserted(BlockId),
    /// An existing block changed position
    Moved {
        /// Moved block
        block_id: BlockId,
        /// Previous index
        from_index: usize,
        /// New index
        to_index: usize,
    },
    /// The drop had no effect
    Unchanged,
}

/// Envelope shape written to page storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBlock {
    /// Block ID, duplicated from `data`
    pub id: BlockId,
    /// Type tag, duplicated from `data`
    #[serde(rename = "type")]
    pub block_type: String,
    /// Index in the sequence at save time
    pub order: i64,
    /// Full canonical block
    pub data: Block,
}

impl From<StoredBlock> for Value {
    fn from(stored: StoredBlock) -> Self {
        let mut record = Map::new();
        record.insert("id".to_string(), Value::String(stored.id.to_string()));
        record.insert("type".to_string(), Value::String(stored.block_type));
        record.insert("order".to_string(), Value::from(stored.order));
        record.insert("data".to_string(), Value::from(stored.data));
        Value::Object(record)
    }
}

/// In-memory block sequence of one page under edit
#[derive(Debug)]
pub struct BlockEditor {
    blocks: Vec<Block>,
    selected: Option<BlockId>,
    drag: DragState,
    journal: EventJournal,
    updated_at: DateTime<Utc>,
}

impl BlockEditor {
    /// Create an editor with an empty sequence
    #[must_use]
    pub fn new() -> Self {
        Self::from_blocks(Vec::new())
    }

    /// Create an editor over existing blocks, in the given order
    ///
    /// Duplicate IDs (seen in drifted legacy data) are replaced with fresh
    /// ones so that every ID is unique within the sequence.
    #[must_use]
    pub fn from_blocks(mut blocks: Vec<Block>) -> Self {
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in &mut blocks {
            if !seen.insert(block.id.clone()) {
                let fresh = BlockId::generate();
                warn!(duplicate = %block.id, replacement = %fresh, "duplicate block id on load");
                block.id = fresh.clone();
                seen.insert(fresh);
            }
        }

        Self {
            blocks,
            selected: None,
            drag: DragState::Idle,
            journal: EventJournal::new(),
            updated_at: Utc::now(),
        }
    }

    /// Load a stored block list, normalizing legacy shapes
    #[must_use]
    pub fn from_stored(records: &[Value]) -> Self {
        let blocks = normalize_page(records)
            .into_iter()
            .map(|placed| placed.block)
            .collect();
        Self::from_blocks(blocks)
    }

    /// Serialize to the storage envelope, `order` = index
    #[must_use]
    pub fn to_stored(&self) -> Vec<StoredBlock> {
        self.blocks
            .iter()
            .enumerate()
            .map(|(index, block)| StoredBlock {
                id: block.id.clone(),
                block_type: block.type_name().to_string(),
                order: index as i64,
                data: block.clone(),
            })
            .collect()
    }

    /// Serialize to stored JSON records
    #[must_use]
    pub fn to_records(&self) -> Vec<Value> {
        self.to_stored().into_iter().map(Value::from).collect()
    }

    /// Blocks in sequence order
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Consume the editor, returning the sequence
    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Get a block by ID
    #[must_use]
    pub fn get_block(&self, block_id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == block_id)
    }

    /// Index of a block in the sequence
    #[must_use]
    pub fn position(&self, block_id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == block_id)
    }

    /// Get the number of blocks
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// When the sequence last changed
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Journal of committed changes
    #[must_use]
    pub fn journal(&self) -> &EventJournal {
        &self.journal
    }

    /// Current drag state
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Select a block; returns `false` if it does not exist
    pub fn select(&mut self, block_id: &BlockId) -> bool {
        if self.position(block_id).is_some() {
            self.selected = Some(block_id.clone());
            true
        } else {
            false
        }
    }

    /// Clear the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently selected block ID
    #[must_use]
    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Insert a new palette block before `target_index`
    ///
    /// A missing or out-of-range index appends, as when dropping onto the
    /// empty canvas.
    pub fn insert_from_palette(
        &mut self,
        type_name: &str,
        target_index: Option<usize>,
    ) -> Result<BlockId> {
        self.ensure_idle()?;
        Ok(self.insert_new(type_name, target_index))
    }

    /// Move `source` to the position `target` occupies
    ///
    /// Array-move semantics, not a swap. Returns `false` without touching
    /// the sequence when the IDs are equal or either is unknown.
    pub fn reorder(&mut self, source: &BlockId, target: &BlockId) -> Result<bool> {
        self.ensure_idle()?;
        Ok(self.move_block(source, target).is_some())
    }

    /// Merge fields into a block
    ///
    /// `id` and `type` keys are ignored. If the merged record no longer fits
    /// the block's type the patch is rejected and the block stays as it was.
    pub fn update(&mut self, block_id: &BlockId, patch: Map<String, Value>) -> Result<()> {
        self.ensure_idle()?;
        let index = self
            .position(block_id)
            .ok_or_else(|| Error::BlockNotFound(block_id.clone()))?;

        let invalid = |e: Error| Error::InvalidPatch {
            block_id: block_id.clone(),
            reason: e.to_string(),
        };

        let mut record = self.blocks[index].clone().into_record();
        let mut fields = Vec::with_capacity(patch.len());
        let mut payload = Map::new();
        for (key, value) in patch {
            if key == "id" || key == "type" {
                warn!(block_id = %block_id, field = %key, "ignoring identity field in block patch");
                continue;
            }
            fields.push(key.clone());
            if !matches!(key.as_str(), "visible" | "className" | "order") && !value.is_null() {
                payload.insert(key.clone(), value.clone());
            }
            record.insert(key, value);
        }
        if fields.is_empty() {
            return Ok(());
        }

        // Patched values must fit the type; fields already stored are not rechecked
        let type_name = self.blocks[index].type_name().to_string();
        BlockContent::from_fields_strict(type_name, payload).map_err(invalid)?;
        let updated = Block::try_from(Value::Object(record)).map_err(invalid)?;
        self.blocks[index] = updated;
        self.touch();
        self.journal.record(
            EditorEventType::BlockUpdated,
            BlockUpdatedPayload {
                block_id: block_id.clone(),
                fields,
            },
        );
        Ok(())
    }

    /// Remove a block, clearing the selection if it pointed at it
    ///
    /// Returns `None` if no block has that ID.
    pub fn delete(&mut self, block_id: &BlockId) -> Result<Option<Block>> {
        self.ensure_idle()?;
        let Some(index) = self.position(block_id) else {
            return Ok(None);
        };

        let block = self.blocks.remove(index);
        if self.selected.as_ref() == Some(block_id) {
            self.selected = None;
        }
        self.touch();
        self.journal.record(
            EditorEventType::BlockDeleted,
            BlockDeletedPayload {
                block: block.clone(),
                index,
            },
        );
        Ok(Some(block))
    }

    // ------------------------------------------------------------------------
    // Two-phase moves
    // ------------------------------------------------------------------------

    /// Start a drag
    pub fn begin_move(&mut self, subject: DragSubject) -> Result<()> {
        self.ensure_idle()?;
        if let DragSubject::Existing(block_id) = &subject {
            if self.position(block_id).is_none() {
                return Err(Error::BlockNotFound(block_id.clone()));
            }
        }
        debug!(?subject, "move started");
        self.drag = DragState::PendingMove(subject);
        Ok(())
    }

    /// Drop the pending drag onto a target and apply it
    pub fn commit_move(&mut self, target: DropTarget) -> Result<MoveOutcome> {
        let DragState::PendingMove(subject) = std::mem::take(&mut self.drag) else {
            return Err(Error::NoPendingMove);
        };

        let outcome = match (subject, target) {
            (DragSubject::Palette(type_name), DropTarget::Block(target)) => {
                let index = self.position(&target);
                MoveOutcome::Inserted(self.insert_new(&type_name, index))
            }
            (DragSubject::Palette(type_name), DropTarget::Canvas) => {
                MoveOutcome::Inserted(self.insert_new(&type_name, None))
            }
            (DragSubject::Existing(source), DropTarget::Block(target)) => {
                match self.move_block(&source, &target) {
                    Some((from_index, to_index)) => MoveOutcome::Moved {
                        block_id: source,
                        from_index,
                        to_index,
                    },
                    None => MoveOutcome::Unchanged,
                }
            }
            (DragSubject::Existing(_), DropTarget::Canvas) => MoveOutcome::Unchanged,
        };
        Ok(outcome)
    }

    /// Abandon the pending drag without changing the sequence
    pub fn cancel_move(&mut self) -> Result<()> {
        let DragState::PendingMove(subject) = std::mem::take(&mut self.drag) else {
            return Err(Error::NoPendingMove);
        };
        self.journal
            .record(EditorEventType::MoveCancelled, serde_json::json!({ "subject": subject }));
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        match self.drag {
            DragState::Idle => Ok(()),
            DragState::PendingMove(_) => Err(Error::MoveInProgress),
        }
    }

    fn insert_new(&mut self, type_name: &str, target_index: Option<usize>) -> BlockId {
        let block = create_block(type_name);
        let block_id = block.id.clone();
        let index = match target_index {
            Some(index) if index < self.blocks.len() => index,
            _ => self.blocks.len(),
        };

        self.blocks.insert(index, block);
        self.touch();
        self.journal.record(
            EditorEventType::BlockAdded,
            BlockAddedPayload {
                block_id: block_id.clone(),
                block_type: type_name.to_string(),
                index,
            },
        );
        block_id
    }

    fn move_block(&mut self, source: &BlockId, target: &BlockId) -> Option<(usize, usize)> {
        if source == target {
            return None;
        }
        let (Some(from_index), Some(to_index)) = (self.position(source), self.position(target))
        else {
            debug!(%source, %target, "reorder with unknown block id ignored");
            return None;
        };

        let block = self.blocks.remove(from_index);
        self.blocks.insert(to_index, block);
        self.touch();
        self.journal.record(
            EditorEventType::BlockMoved,
            BlockMovedPayload {
                block_id: source.clone(),
                from_index,
                to_index,
            },
        );
        Some((from_index, to_index))
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for BlockEditor {
    fn default() -> Self {
        Self::new()
    }
}
