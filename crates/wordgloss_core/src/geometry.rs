//! Token geometry types and the live-surface snapshot contract.

/// Axis-aligned bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenBox {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl TokenBox {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Rounded vertical center, the value all line math operates on.
    ///
    /// Rounding absorbs sub-pixel rendering jitter before quantization.
    pub fn center_y(&self) -> f32 {
        ((self.top + self.bottom) / 2.0).round()
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Whether this box covers no visible area (hidden or collapsed content).
    pub fn is_zero_area(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// One rendered word: document index, rendered text, and on-screen box.
///
/// Tokens are ephemeral snapshots of the live surface; they are never cached
/// across frames or content reloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub bbox: TokenBox,
}

/// Seam between the geometry engine and the live rendering surface.
///
/// `snapshot_tokens` is a pure O(n) read of current layout, re-queried on
/// every gesture endpoint rather than cached, because layout can shift
/// between pointer-down and pointer-up. An unmounted surface returns an
/// empty snapshot, which callers treat as a no-op, never an error.
pub trait TokenSurface {
    /// Current tokens in ascending index order, zero-area boxes excluded.
    fn snapshot_tokens(&self) -> Vec<Token>;

    /// Bounding box of the content surface, or `None` when not mounted.
    fn surface_bounds(&self) -> Option<TokenBox>;
}

#[cfg(test)]
mod tests {
    use super::TokenBox;

    #[test]
    fn center_y_rounds_midpoint() {
        let bbox = TokenBox::new(0.0, 10.0, 99.2, 104.1);
        assert_eq!(bbox.center_y(), 102.0);
    }

    #[test]
    fn zero_area_detects_collapsed_boxes() {
        assert!(TokenBox::new(5.0, 5.0, 0.0, 10.0).is_zero_area());
        assert!(TokenBox::new(0.0, 10.0, 7.0, 7.0).is_zero_area());
        assert!(!TokenBox::new(0.0, 1.0, 0.0, 1.0).is_zero_area());
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let bbox = TokenBox::new(0.0, 10.0, 0.0, 20.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(10.0, 20.0));
        assert!(!bbox.contains(10.1, 5.0));
    }
}
