//! Bracket validation
//!
//! A single left-to-right scan with a stack of `[` offsets. Every other byte
//! is ignored here; debug instructions and comments are handled at execution
//! time.

use crate::interpreter::errors::SyntaxError;
use rustc_hash::FxHashMap;

/// Check that every `[` has a matching `]` in proper nesting order.
///
/// Pure: touches no engine state and may be called any number of times.
pub fn validate(source: &str) -> Result<(), SyntaxError> {
    scan(source.as_bytes(), |_, _| {})
}

/// Map every bracket offset to the offset of its partner (both directions).
///
/// Used by the debugger to highlight the matching bracket; the engine itself
/// finds partners by scanning.
pub fn bracket_pairs(source: &str) -> Result<FxHashMap<usize, usize>, SyntaxError> {
    let mut pairs = FxHashMap::default();
    scan(source.as_bytes(), |open, close| {
        pairs.insert(open, close);
        pairs.insert(close, open);
    })?;
    Ok(pairs)
}

fn scan(code: &[u8], mut on_pair: impl FnMut(usize, usize)) -> Result<(), SyntaxError> {
    let mut opens: Vec<usize> = Vec::new();

    for (position, &byte) in code.iter().enumerate() {
        match byte {
            b'[' => opens.push(position),
            b']' => {
                let open = opens
                    .pop()
                    .ok_or(SyntaxError::UnmatchedClose { position })?;
                on_pair(open, position);
            }
            _ => {}
        }
    }

    match opens.pop() {
        Some(position) => Err(SyntaxError::UnmatchedOpen { position }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open_is_rejected() {
        assert_eq!(
            validate("["),
            Err(SyntaxError::UnmatchedOpen { position: 0 })
        );
    }

    #[test]
    fn test_single_close_is_rejected() {
        assert_eq!(
            validate("]"),
            Err(SyntaxError::UnmatchedClose { position: 0 })
        );
    }

    #[test]
    fn test_balanced_sources_pass() {
        assert!(validate("").is_ok());
        assert!(validate("[]").is_ok());
        assert!(validate("[[[][[[]]]]]").is_ok());
        assert!(validate("comment [ with + text ] and !! print").is_ok());
    }

    #[test]
    fn test_close_reported_at_first_excess() {
        assert_eq!(
            validate("[[[[[]]][][]]][]]]]]]][]]][[]"),
            Err(SyntaxError::UnmatchedClose { position: 16 })
        );
    }

    #[test]
    fn test_wrong_order_is_rejected() {
        assert!(matches!(
            validate("]["),
            Err(SyntaxError::UnmatchedClose { position: 0 })
        ));
    }

    #[test]
    fn test_innermost_open_is_reported() {
        assert_eq!(
            validate("[[]["),
            Err(SyntaxError::UnmatchedOpen { position: 3 })
        );
    }

    #[test]
    fn test_bracket_pairs_are_symmetric() {
        let pairs = bracket_pairs("+[>[-]<]").unwrap();
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[&1], 7);
        assert_eq!(pairs[&7], 1);
        assert_eq!(pairs[&3], 5);
        assert_eq!(pairs[&5], 3);
    }

    #[test]
    fn test_bracket_pairs_propagates_errors() {
        assert!(bracket_pairs("[[]").is_err());
    }
}
