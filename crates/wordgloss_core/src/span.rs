//! Horizontal span resolution against a locked line.

use crate::geometry::Token;

/// Vertical tolerance for attaching a token to a locked line.
///
/// Wider than the line-grouping bucket because the locked line Y is a bucket
/// mean, not any one token's true center.
pub const LINE_ATTACH_TOLERANCE: f32 = 15.0;

/// Resolve the tokens covered by a horizontal sweep on a locked line.
///
/// Called once, at gesture end, against a fresh snapshot (layout may have
/// shifted during the drag). A token is included when any part of its box
/// overlaps the swept interval; full containment is not required, and a
/// zero-width sweep (a tap) still resolves against that single X.
///
/// # Returns
/// Covered tokens in snapshot (ascending index) order.
pub fn resolve_span(tokens: Vec<Token>, start_x: f32, end_x: f32, line_y: f32) -> Vec<Token> {
    let (min_x, max_x) = if start_x <= end_x {
        (start_x, end_x)
    } else {
        (end_x, start_x)
    };
    tokens
        .into_iter()
        .filter(|token| {
            (token.bbox.center_y() - line_y).abs() <= LINE_ATTACH_TOLERANCE
                && token.bbox.right >= min_x
                && token.bbox.left <= max_x
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TokenBox;

    fn token(index: usize, left: f32, right: f32, center_y: f32) -> Token {
        Token {
            index,
            text: format!("w{}", index),
            bbox: TokenBox::new(left, right, center_y - 5.0, center_y + 5.0),
        }
    }

    fn sample_line() -> Vec<Token> {
        vec![
            token(0, 0.0, 8.0, 100.0),
            token(1, 12.0, 40.0, 100.0),
            token(2, 45.0, 80.0, 100.0),
            token(3, 85.0, 118.0, 100.0),
            token(4, 125.0, 160.0, 100.0),
        ]
    }

    #[test]
    fn partial_overlap_includes_edge_tokens() {
        let covered = resolve_span(sample_line(), 10.0, 120.0, 100.0);
        let indices: Vec<usize> = covered.iter().map(|t| t.index).collect();
        assert_eq!(indices, [1, 2, 3]);
    }

    #[test]
    fn reversed_sweep_resolves_identically() {
        let forward = resolve_span(sample_line(), 10.0, 120.0, 100.0);
        let backward = resolve_span(sample_line(), 120.0, 10.0, 100.0);
        assert_eq!(forward, backward);
    }

    #[test]
    fn zero_width_tap_selects_single_token() {
        let covered = resolve_span(sample_line(), 50.0, 50.0, 100.0);
        let indices: Vec<usize> = covered.iter().map(|t| t.index).collect();
        assert_eq!(indices, [2]);
    }

    #[test]
    fn off_line_tokens_are_excluded() {
        let mut tokens = sample_line();
        tokens.push(token(5, 0.0, 200.0, 130.0));
        tokens.push(token(6, 0.0, 200.0, 114.0)); // within the 15-unit band
        let covered = resolve_span(tokens, 0.0, 200.0, 100.0);
        let indices: Vec<usize> = covered.iter().map(|t| t.index).collect();
        assert_eq!(indices, [0, 1, 2, 3, 4, 6]);
    }

    #[test]
    fn sweep_outside_all_tokens_is_empty() {
        assert!(resolve_span(sample_line(), 300.0, 400.0, 100.0).is_empty());
    }
}
