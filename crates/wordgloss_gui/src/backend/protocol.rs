//! Protocol types for the WordGloss backend worker.

use std::path::PathBuf;
use wordgloss_core::{Document, HighlightId};

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Fetch an explanation for a committed highlight, keyed by its id.
    Explain { id: HighlightId, text: String },
    /// Read a replacement document from disk off the UI thread.
    LoadFile { path: PathBuf },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum CoreEvent {
    /// An explanation fetch completed for the highlight with this id.
    ExplanationReady { id: HighlightId, body: String },
    /// An explanation fetch failed; `message` is user-displayable.
    ExplanationFailed { id: HighlightId, message: String },
    /// A replacement document finished loading.
    DocumentLoaded { document: Document },
    /// A document load failed (unreadable, oversized, not text).
    LoadFailed { message: String },
}
