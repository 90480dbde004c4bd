//! Highlight registry with document-order ranking and dedup.

use chrono::{DateTime, Utc};
use tracing::debug;

/// Creation-ordered highlight identifier.
///
/// Monotonic across the registry's lifetime, including `clear()`, so a stale
/// explanation arriving after a content reload can never match a new
/// highlight's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HighlightId(pub u64);

/// Lifecycle of a highlight's asynchronously fetched explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Explanation {
    Pending,
    Ready(String),
    Failed(String),
}

/// A confirmed selection of one or more tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub id: HighlightId,
    /// Space-joined token texts in ascending index order.
    pub text: String,
    pub token_indices: Vec<usize>,
    /// Minimum member index; the registry's visible sort key.
    pub document_order_key: usize,
    pub explanation: Explanation,
    pub created_at: DateTime<Utc>,
}

/// Ordered collection of confirmed highlights.
///
/// Invariant: iteration order is always non-decreasing in
/// `document_order_key`. The collection is re-sorted on every insertion and
/// never on removal, so removals preserve relative order.
#[derive(Debug, Default)]
pub struct HighlightRegistry {
    items: Vec<Highlight>,
    next_id: u64,
}

impl HighlightRegistry {
    /// Commit a resolved gesture as a new highlight.
    ///
    /// Rejects silently when an existing highlight's text matches
    /// case-insensitively, or when the index set is empty; neither is an
    /// error. On accept the whole collection is re-sorted by document order
    /// (stable, so equal keys keep creation order).
    ///
    /// # Returns
    /// The new highlight's id, or `None` when the commit was rejected.
    pub fn commit(&mut self, text: impl Into<String>, token_indices: Vec<usize>) -> Option<HighlightId> {
        let text = text.into();
        let document_order_key = token_indices.iter().copied().min()?;
        let normalized = text.to_lowercase();
        if self
            .items
            .iter()
            .any(|highlight| highlight.text.to_lowercase() == normalized)
        {
            debug!(%text, "duplicate selection ignored");
            return None;
        }
        let id = HighlightId(self.next_id);
        self.next_id += 1;
        self.items.push(Highlight {
            id,
            text,
            token_indices,
            document_order_key,
            explanation: Explanation::Pending,
            created_at: Utc::now(),
        });
        self.items.sort_by_key(|highlight| highlight.document_order_key);
        Some(id)
    }

    /// Apply an explanation outcome to the highlight it was fetched for.
    ///
    /// Dispatch is strictly by id: a completion for a dismissed highlight is
    /// a harmless miss, and an already-resolved highlight is never
    /// overwritten, so completion order across concurrent fetches cannot
    /// corrupt newer state.
    ///
    /// # Returns
    /// `true` when a pending highlight was updated.
    pub fn resolve(&mut self, id: HighlightId, outcome: Result<String, String>) -> bool {
        let Some(highlight) = self.items.iter_mut().find(|highlight| highlight.id == id) else {
            debug!(id = id.0, "stale explanation discarded");
            return false;
        };
        if highlight.explanation != Explanation::Pending {
            return false;
        }
        highlight.explanation = match outcome {
            Ok(body) => Explanation::Ready(body),
            Err(message) => Explanation::Failed(message),
        };
        true
    }

    /// Remove a highlight by id. No resort; relative order is preserved.
    ///
    /// # Returns
    /// `true` when a highlight was removed.
    pub fn remove(&mut self, id: HighlightId) -> bool {
        let before = self.items.len();
        self.items.retain(|highlight| highlight.id != id);
        self.items.len() != before
    }

    /// Drop all highlights (content reload). Ids keep advancing.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: HighlightId) -> Option<&Highlight> {
        self.items.iter().find(|highlight| highlight.id == id)
    }

    /// Highlights in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Highlight> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether any highlight is still waiting on its explanation.
    pub fn any_pending(&self) -> bool {
        self.items
            .iter()
            .any(|highlight| highlight.explanation == Explanation::Pending)
    }
}
