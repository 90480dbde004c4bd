//! Core domain library for WordGloss (documents, geometry, gestures, registry).

/// Configuration loading and defaults.
pub mod config;
/// Document model and word tokenization.
pub mod document;
/// Application error types (document loading, explanation fetches).
pub mod error;
/// Gesture state machine driving line location and span resolution.
pub mod gesture;
/// Token geometry types and the live-surface snapshot contract.
pub mod geometry;
/// Vertical line location over token snapshots.
pub mod lines;
/// Highlight registry with document-order ranking and dedup.
pub mod registry;
/// Horizontal span resolution against a locked line.
pub mod span;

pub use config::Config;
pub use document::{word_tokens, Document, WordToken};
pub use error::GlossError;
pub use geometry::{Token, TokenBox, TokenSurface};
pub use gesture::{GestureMachine, InkSpan, PointerClass, SpanSelection};
pub use registry::{Explanation, Highlight, HighlightId, HighlightRegistry};
