//! # Block extraction
//!
//! Turns annotated source text into per-declaration records.
//!
//! ## Modules
//!
//! - **`locate`**: finds the interior lines of a `"<token> {"` block (first `}` wins)
//! - **`channels`**: ordered channel registry, prefix table and renderers
//! - **`join`**: paragraph-aware markdown join used by the long-form channel
//! - **`segment`**: walks block lines and emits one [`Record`] per declaration
//! - **`nested`**: depth-tracking comment collection for blocks with nested braces
//!
//! Every call reads its file fresh; nothing is cached between calls.

pub mod channels;
pub mod fence;
pub mod join;
pub mod locate;
pub mod nested;
pub mod segment;

use std::path::PathBuf;

pub use channels::{ChannelDef, ChannelKey, ChannelRegistry, PrefixBinding, Renderer};
pub use join::graceful_join_markdown;
pub use locate::match_block;
pub use nested::{block_comment_lines, merge_comments};
pub use segment::{CommentStacks, segment_lines};

use crate::io::{self, IoError, PathResolver};
use crate::models::{ChannelValues, Record};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to find block starts with '{starts_with}' in '{}'", .path.display())]
    BlockNotFound { starts_with: String, path: PathBuf },
}

/// Runs block extraction against files reached through a [`PathResolver`].
#[derive(Debug, Clone)]
pub struct Extractor {
    resolver: PathResolver,
    registry: ChannelRegistry,
}

impl Extractor {
    pub fn new(resolver: PathResolver) -> Self {
        Self::with_registry(resolver, ChannelRegistry::default())
    }

    pub fn with_registry(resolver: PathResolver, registry: ChannelRegistry) -> Self {
        Self { resolver, registry }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Segment the block opened by `"<starts_with> {"` in `file` into records.
    pub fn split_block(&self, file: &str, starts_with: &str) -> Result<Vec<Record>, ExtractError> {
        let (path, text) = self.read(file)?;
        split_block_text(&text, starts_with, &self.registry).ok_or_else(|| {
            ExtractError::BlockNotFound {
                starts_with: starts_with.to_string(),
                path,
            }
        })
    }

    /// Merge the channel comments found anywhere inside a possibly nested block.
    ///
    /// A block that does not exist simply yields no values.
    pub fn comments_in_block(
        &self,
        file: &str,
        starts_with: &str,
    ) -> Result<ChannelValues, ExtractError> {
        let (_, text) = self.read(file)?;
        Ok(comments_in_block_text(&text, starts_with, &self.registry))
    }

    /// Resolve `file` and read it, returning the resolved path alongside the text.
    pub fn read(&self, file: &str) -> Result<(PathBuf, String), IoError> {
        let path = self.resolver.resolve(file);
        let text = io::read_source(&path)?;
        Ok((path, text))
    }
}

/// In-memory form of [`Extractor::split_block`]. `None` when the block has no interior lines.
pub fn split_block_text(
    text: &str,
    starts_with: &str,
    registry: &ChannelRegistry,
) -> Option<Vec<Record>> {
    let lines = match_block(starts_with, text);
    if lines.is_empty() {
        log::debug!("no block found for '{starts_with}'");
        return None;
    }
    let records = segment_lines(&lines, registry);
    log::debug!(
        "block '{starts_with}': {} lines, {} records",
        lines.len(),
        records.len()
    );
    Some(records)
}

/// In-memory form of [`Extractor::comments_in_block`].
pub fn comments_in_block_text(
    text: &str,
    starts_with: &str,
    registry: &ChannelRegistry,
) -> ChannelValues {
    let lines = block_comment_lines(starts_with, text);
    log::debug!("block '{starts_with}': {} comment lines", lines.len());
    merge_comments(&lines, registry)
}
