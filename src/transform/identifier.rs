//! Edge transform for single identifier values.
//!
//! Shifts the first two and the last two non-space characters of a
//! string cell; everything in between, and every space, is left alone.
//! On short values the leading and trailing selections may overlap —
//! selection is a set of positions, so an overlapping character is
//! still shifted exactly once.

use serde_json::Value;
use std::collections::HashMap;

use super::shift::shift_char;
use crate::models::Direction;

/// How many non-space characters are shifted at each end of the value.
const EDGE_WIDTH: usize = 2;

/// Transform one cell value.
///
/// Only non-empty string cells are transformed; `Null`, numbers,
/// booleans, and empty strings pass through unchanged. The returned
/// string has the same length and layout as the input — only the
/// selected edge characters differ.
pub fn transform_value(value: &Value, direction: Direction) -> Value {
    match value {
        Value::String(s) if !s.is_empty() => Value::String(transform_str(s, direction)),
        _ => value.clone(),
    }
}

/// Transform a string, shifting the selected edge positions.
fn transform_str(s: &str, direction: Direction) -> String {
    let mut chars: Vec<char> = s.chars().collect();

    // Positions of non-space characters; space is the literal ' ' only,
    // other whitespace counts as a normal character.
    let non_space: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| **c != ' ')
        .map(|(i, _)| i)
        .collect();

    let mut selected: Vec<usize> = non_space.iter().take(EDGE_WIDTH).copied().collect();
    for &i in non_space.iter().rev().take(EDGE_WIDTH) {
        if !selected.contains(&i) {
            selected.push(i);
        }
    }

    for i in selected {
        chars[i] = shift_char(chars[i], direction);
    }
    chars.into_iter().collect()
}

/// Memoized variant of [`transform_value`] for one column pass.
///
/// Identifier columns are full of repeats; the cache avoids
/// recomputing them. Only string cells enter the cache.
pub fn transform_cached(
    value: &Value,
    direction: Direction,
    cache: &mut HashMap<String, String>,
) -> Value {
    match value {
        Value::String(s) if !s.is_empty() => {
            if let Some(hit) = cache.get(s) {
                return Value::String(hit.clone());
            }
            let out = transform_str(s, direction);
            cache.insert(s.clone(), out.clone());
            Value::String(out)
        }
        _ => value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn forward(s: &str) -> Value {
        transform_value(&json!(s), Direction::Forward)
    }

    fn backward(s: &str) -> Value {
        transform_value(&json!(s), Direction::Backward)
    }

    #[test]
    fn test_basic_identifier() {
        // First two and last two of a long value; the middle is untouched.
        assert_eq!(forward("ABCDEF"), json!("BCCDFG"));
    }

    #[test]
    fn test_interior_space_scenario() {
        // "ab cd": leading a,b and trailing c,d all shift; space stays.
        assert_eq!(forward("ab cd"), json!("bc de"));
    }

    #[test]
    fn test_single_char() {
        assert_eq!(forward("X"), json!("Y"));
        assert_eq!(backward("Y"), json!("X"));
    }

    #[test]
    fn test_underscore_between_digits() {
        // "9_9": selected positions are {0,1,2}; '_' is a fixed point.
        assert_eq!(forward("9_9"), json!("0_0"));
    }

    #[test]
    fn test_short_values_shift_once() {
        // 1-3 non-space chars: leading/trailing selections overlap but
        // each character moves exactly one step.
        assert_eq!(forward("ab"), json!("bc"));
        assert_eq!(forward("abc"), json!("bcd"));
        assert_eq!(forward("a c"), json!("b d"));
    }

    #[test]
    fn test_leading_trailing_spaces() {
        // Spaces are skipped when picking edge characters but keep
        // their positions in the output.
        assert_eq!(forward("  abcde  "), json!("  bccef  "));
    }

    #[test]
    fn test_all_spaces_unchanged() {
        assert_eq!(forward("   "), json!("   "));
    }

    #[test]
    fn test_non_string_identity() {
        for v in [json!(null), json!(42), json!(1.5), json!(true), json!("")] {
            assert_eq!(transform_value(&v, Direction::Forward), v);
            assert_eq!(transform_value(&v, Direction::Backward), v);
        }
    }

    #[test]
    fn test_round_trip() {
        for s in ["AB_1234_ZZ", "x", "id 0099", "Part No 42", "ZZZ999", "a b"] {
            let there = transform_value(&json!(s), Direction::Forward);
            let back = transform_value(&there, Direction::Backward);
            assert_eq!(back, json!(s), "round trip failed for {s:?}");
        }
    }

    #[test]
    fn test_other_whitespace_is_not_space() {
        // Tab is a normal non-space character: it is selected as an
        // edge position but shifts to itself.
        assert_eq!(forward("\ta"), json!("\tb"));
    }

    #[test]
    fn test_cached_matches_uncached() {
        let mut cache = HashMap::new();
        let values = [json!("AB12"), json!("CD34"), json!("AB12"), json!(7)];
        for v in &values {
            assert_eq!(
                transform_cached(v, Direction::Forward, &mut cache),
                transform_value(v, Direction::Forward)
            );
        }
        // Two distinct strings were seen.
        assert_eq!(cache.len(), 2);
    }
}
