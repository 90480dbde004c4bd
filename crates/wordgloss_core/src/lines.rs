//! Vertical line location over token snapshots.
//!
//! Lines are not materialized anywhere; they are recomputed per query by
//! bucketing token centers into [`LINE_BUCKET`]-unit quantization bands and
//! averaging each band. This is a heuristic, not guaranteed line detection:
//! centers falling exactly on a bucket boundary can group with the adjacent
//! band (see `boundary_centers_keep_deterministic_buckets` below, which pins
//! the behavior).

use crate::geometry::Token;
use std::collections::HashMap;

/// Quantization band height for grouping tokens into visual lines.
pub const LINE_BUCKET: f32 = 10.0;

/// Locate the visual line nearest a vertical pointer coordinate.
///
/// Each token's rounded center-Y is quantized to a bucket key
/// (`round(center / 10) * 10`); a bucket's representative Y is the mean of
/// its members' centers. The representative with minimal distance to
/// `pointer_y` wins; exact ties go to the first-encountered bucket in
/// snapshot order stably.
///
/// # Returns
/// The representative Y of the nearest line, or `None` for an empty snapshot.
pub fn locate_line(tokens: &[Token], pointer_y: f32) -> Option<f32> {
    if tokens.is_empty() {
        return None;
    }

    // Bucket sums keyed by quantized center; `order` preserves first-seen
    // bucket order so distance ties resolve deterministically.
    let mut order: Vec<i64> = Vec::new();
    let mut buckets: HashMap<i64, (f32, usize)> = HashMap::new();
    for token in tokens {
        let center = token.bbox.center_y();
        let key = (center / LINE_BUCKET).round() as i64;
        let entry = buckets.entry(key).or_insert_with(|| {
            order.push(key);
            (0.0, 0)
        });
        entry.0 += center;
        entry.1 += 1;
    }

    let mut best: Option<(f32, f32)> = None;
    for key in order {
        let (sum, count) = buckets[&key];
        let representative = sum / count as f32;
        let distance = (representative - pointer_y).abs();
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((representative, distance)),
        }
    }
    best.map(|(representative, _)| representative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TokenBox;

    fn token(index: usize, top: f32, bottom: f32) -> Token {
        Token {
            index,
            text: format!("w{}", index),
            bbox: TokenBox::new(index as f32 * 30.0, index as f32 * 30.0 + 25.0, top, bottom),
        }
    }

    #[test]
    fn empty_snapshot_locates_nothing() {
        assert_eq!(locate_line(&[], 100.0), None);
    }

    #[test]
    fn single_line_mean_is_representative() {
        // Centers 100, 102, 98 share one bucket; representative is their mean.
        let tokens = [
            token(0, 95.0, 105.0),
            token(1, 97.0, 107.0),
            token(2, 93.0, 103.0),
        ];
        assert_eq!(locate_line(&tokens, 50.0), Some(100.0));
    }

    #[test]
    fn nearest_of_two_lines_wins() {
        let tokens = [token(0, 95.0, 105.0), token(1, 145.0, 155.0)];
        assert_eq!(locate_line(&tokens, 110.0), Some(100.0));
        assert_eq!(locate_line(&tokens, 140.0), Some(150.0));
    }

    #[test]
    fn equidistant_pointer_takes_first_scanned_bucket() {
        let tokens = [token(0, 95.0, 105.0), token(1, 145.0, 155.0)];
        // 125 is exactly between representatives 100 and 150.
        assert_eq!(locate_line(&tokens, 125.0), Some(100.0));
    }

    #[test]
    fn boundary_centers_keep_deterministic_buckets() {
        // Center 105 quantizes to bucket 110 while 104 stays in bucket 100,
        // even though the two tokens are one unit apart vertically.
        let tokens = [token(0, 100.0, 110.0), token(1, 99.0, 109.0)];
        let located = locate_line(&tokens, 104.5).expect("line");
        assert!(located == 105.0 || located == 104.0);
        // Pointer far above still resolves to whichever bucket sits higher.
        assert_eq!(locate_line(&tokens, 0.0), Some(104.0));
    }
}
