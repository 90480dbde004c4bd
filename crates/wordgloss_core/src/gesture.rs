//! Gesture state machine driving line location and span resolution.
//!
//! The machine owns the pointer lifecycle: a press arms it (locking the line
//! and starting X), moves update only the ink's trailing edge, and release
//! resolves the span once against a fresh snapshot. Any path back to idle
//! clears the ink; there is no partially-armed state to leak.

use crate::geometry::TokenSurface;
use crate::lines::locate_line;
use crate::span::resolve_span;
use tracing::trace;

/// Input device class for the arming policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerClass {
    /// Precision pointer (stylus); always gestures.
    Pen,
    /// Pointing device; gestures unless the bypass modifier is held.
    Mouse,
    /// Plain touch; never gestures.
    Touch,
}

/// Arming policy for a pointer press.
///
/// A mouse press with the bypass modifier held is left entirely to the
/// platform's native text selection; it is not intercepted here.
///
/// # Returns
/// `true` when the device/modifier combination may start a gesture.
pub fn gesture_allowed(class: PointerClass, bypass_modifier: bool) -> bool {
    match class {
        PointerClass::Pen => true,
        PointerClass::Mouse => !bypass_modifier,
        PointerClass::Touch => false,
    }
}

/// Visual span painted while a gesture is armed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkSpan {
    pub min_x: f32,
    pub max_x: f32,
    pub line_y: f32,
}

/// A successfully resolved gesture: joined text plus member indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanSelection {
    pub text: String,
    pub token_indices: Vec<usize>,
}

/// Locked gesture values; only `end_x` mutates after arming.
#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureContext {
    line_y: f32,
    start_x: f32,
    end_x: f32,
}

/// Idle/armed pointer state machine.
#[derive(Debug, Default)]
pub struct GestureMachine {
    armed: Option<GestureContext>,
}

impl GestureMachine {
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Attempt to arm on a pointer press.
    ///
    /// Arms only when the device policy passes, the press falls inside the
    /// surface bounds, and a line resolves near the pointer. On arming the
    /// line Y and starting X are locked for the whole gesture and the ink
    /// starts zero-width.
    ///
    /// # Returns
    /// `true` when the machine armed.
    pub fn pointer_down(
        &mut self,
        surface: &dyn TokenSurface,
        class: PointerClass,
        bypass_modifier: bool,
        x: f32,
        y: f32,
    ) -> bool {
        self.armed = None;
        if !gesture_allowed(class, bypass_modifier) {
            return false;
        }
        let Some(bounds) = surface.surface_bounds() else {
            return false;
        };
        if !bounds.contains(x, y) {
            return false;
        }
        let tokens = surface.snapshot_tokens();
        let Some(line_y) = locate_line(&tokens, y) else {
            return false;
        };
        trace!(line_y, start_x = x, "gesture armed");
        self.armed = Some(GestureContext {
            line_y,
            start_x: x,
            end_x: x,
        });
        true
    }

    /// Update the sweep's trailing edge while armed.
    ///
    /// No token resolution happens here; resolution runs once, at release.
    pub fn pointer_move(&mut self, x: f32) {
        if let Some(ctx) = &mut self.armed {
            ctx.end_x = x;
        }
    }

    /// Release the gesture, resolving the swept span against a fresh snapshot.
    ///
    /// Always returns the machine to idle and clears the ink, whether or not
    /// any tokens were covered.
    ///
    /// # Returns
    /// The selection when at least one token was covered, otherwise `None`.
    pub fn pointer_up(&mut self, surface: &dyn TokenSurface) -> Option<SpanSelection> {
        let ctx = self.armed.take()?;
        let covered = resolve_span(surface.snapshot_tokens(), ctx.start_x, ctx.end_x, ctx.line_y);
        if covered.is_empty() {
            trace!("gesture released over no tokens");
            return None;
        }
        let token_indices: Vec<usize> = covered.iter().map(|token| token.index).collect();
        let text = covered
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        trace!(%text, tokens = token_indices.len(), "gesture resolved");
        Some(SpanSelection {
            text,
            token_indices,
        })
    }

    /// Unconditional return to idle (pointer-cancel, content reload).
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Current ink span for the overlay, when armed.
    pub fn ink(&self) -> Option<InkSpan> {
        self.armed.map(|ctx| InkSpan {
            min_x: ctx.start_x.min(ctx.end_x),
            max_x: ctx.start_x.max(ctx.end_x),
            line_y: ctx.line_y,
        })
    }
}
