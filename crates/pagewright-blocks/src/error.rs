//! Error types for pagewright-blocks
//!
//! Most of the block pipeline degrades locally instead of failing: the
//! normalizer skips unrecoverable records and the renderer emits
//! placeholders. The variants below cover the editor and the page store,
//! where the caller has to know that nothing changed.

use thiserror::Error;

use crate::block::BlockId;

/// Block pipeline error type
#[derive(Debug, Error)]
pub enum Error {
    /// Block not found in the edited sequence
    #[error("block not found: {0}")]
    BlockNotFound(BlockId),

    /// A drag move is pending and must be committed or cancelled first
    #[error("a block move is already in progress")]
    MoveInProgress,

    /// Commit or cancel was requested without a pending move
    #[error("no block move is in progress")]
    NoPendingMove,

    /// A record could not be read as a canonical block
    #[error("invalid block: {0}")]
    InvalidBlock(String),

    /// A field patch would break the block's payload shape
    #[error("invalid patch for block {block_id}: {reason}")]
    InvalidPatch {
        /// Block the patch targeted
        block_id: BlockId,
        /// Why the patch was rejected
        reason: String,
    },

    /// Page not found in the store
    #[error("page not found: {locale}/{slug}")]
    PageNotFound {
        /// Page locale
        locale: String,
        /// Page slug
        slug: String,
    },

    /// Slug or locale cannot be used as a storage key
    #[error("invalid page key: {0}")]
    InvalidPageKey(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Storage I/O error
    #[error("storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create an invalid block error
    #[must_use]
    pub fn invalid_block(msg: impl Into<String>) -> Self {
        Self::InvalidBlock(msg.into())
    }

    /// Create a storage error
    #[must_use]
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Check if the error only rejected an editor interaction
    ///
    /// The sequence is untouched after any of these, so the editor can keep
    /// accepting input.
    #[must_use]
    pub fn is_rejected_edit(&self) -> bool {
        matches!(
            self,
            Self::BlockNotFound(_)
                | Self::MoveInProgress
                | Self::NoPendingMove
                | Self::InvalidPatch { .. }
        )
    }

    /// Get a stable error code for logs and API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::BlockNotFound(_) => "block_not_found",
            Self::MoveInProgress => "move_in_progress",
            Self::NoPendingMove => "no_pending_move",
            Self::InvalidBlock(_) => "invalid_block",
            Self::InvalidPatch { .. } => "invalid_patch",
            Self::PageNotFound { .. } => "page_not_found",
            Self::InvalidPageKey(_) => "invalid_page_key",
            Self::Serialization(_) => "serialization_error",
            Self::Storage(_) => "storage_error",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for block operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = Error::BlockNotFound(BlockId::from("b1"));
        assert_eq!(err.code(), "block_not_found");

        let err = Error::PageNotFound {
            locale: "en".to_string(),
            slug: "home".to_string(),
        };
        assert_eq!(err.code(), "page_not_found");
    }

    #[test]
    fn test_rejected_edits() {
        assert!(Error::MoveInProgress.is_rejected_edit());
        assert!(Error::BlockNotFound(BlockId::from("x")).is_rejected_edit());
        assert!(!Error::storage("disk full").is_rejected_edit());
    }

    #[test]
    fn test_error_display() {
        let err = Error::PageNotFound {
            locale: "de".to_string(),
            slug: "pricing".to_string(),
        };
        assert_eq!(err.to_string(), "page not found: de/pricing");
    }

    #[test]
    fn test_from_serde_error() {
        let result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        let err: Error = result.unwrap_err().into();
        assert_eq!(err.code(), "serialization_error");
    }
}
