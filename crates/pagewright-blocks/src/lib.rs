//! Pagewright Blocks - Page Content Model
//!
//! This crate provides the block model behind Pagewright landing pages:
//! - Schema: Registry of block types and their fields
//! - Block: Typed block payloads and canonical records
//! - Factory: Default blocks for the editor palette
//! - Editor: Ordered block sequence with drag-and-drop moves
//! - Normalize: Repair of legacy stored block shapes
//! - Render: HTML sections per block type
//! - Store: Page persistence
//! - Events: Journal of editor mutations
//! - Error: Error types for block operations
//!
//! ## Usage
//!
//! ```ignore
//! use pagewright_blocks::{BlockEditor, DragSubject, DropTarget, PageRenderer};
//!
//! let mut editor = BlockEditor::from_stored(&page.blocks);
//! editor.begin_move(DragSubject::Palette("hero".to_string()))?;
//! editor.commit_move(DropTarget::Canvas)?;
//!
//! let html = PageRenderer::new().render_blocks(editor.blocks()).html();
//! ```
//!
//! ## Stored shapes
//!
//! Pages saved by older editors may wrap block fields in one or more `data`
//! envelopes. [`normalize::normalize`] flattens them into canonical records
//! before anything else reads them; saving always writes the current shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod block;
pub mod editor;
pub mod error;
pub mod events;
pub mod factory;
pub mod normalize;
pub mod render;
pub mod schema;
pub mod store;

pub use block::{Block, BlockContent, BlockId};
pub use editor::{BlockEditor, DragState, DragSubject, DropTarget, MoveOutcome, StoredBlock};
pub use error::{Error, Result};
pub use events::{EditorEvent, EditorEventType, EventJournal};
pub use factory::create_block;
pub use normalize::{normalize, normalize_page, PlacedBlock, MAX_UNWRAP_DEPTH};
pub use render::{PageRenderer, RenderOptions, RenderedBlock, RenderedPage};
pub use schema::{is_valid_type, validate, BlockKind, FieldViolation, Severity};
pub use store::{FilePageStore, PageStore, PageSummary, StoredPage};
