//! Worker Unit Module
//!
//! Pure per-chunk analysis functions. No shared state, safe to run
//! concurrently and in any order.

use std::str::FromStr;

use crate::error::AnalysisError;

// == Operation ==
/// The analysis to perform over a chunk of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Character count
    Length,
    /// Case-insensitive ASCII vowel count
    Vowels,
}

impl Operation {
    /// Wire/tracing name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Length => "length",
            Operation::Vowels => "vowels",
        }
    }
}

impl FromStr for Operation {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Operation::Length),
            "vowels" => Ok(Operation::Vowels),
            other => Err(AnalysisError::UnsupportedOperation(other.to_string())),
        }
    }
}

// == Compute ==
/// Runs one analysis over one chunk of text.
pub fn compute(operation: Operation, text: &str) -> u64 {
    match operation {
        Operation::Length => text.chars().count() as u64,
        Operation::Vowels => count_vowels_ascii(text),
    }
}

/// Counts ASCII vowels case-insensitively.
///
/// Forces ASCII letters to lowercase via `| 0x20` before the membership
/// test. Non-ASCII bytes can never match a vowel code, so accented vowels
/// (e.g. the é in "café") contribute zero. That ASCII-only behavior is a
/// compatibility requirement, not an oversight.
fn count_vowels_ascii(text: &str) -> u64 {
    text.bytes()
        .filter(|b| matches!(b | 0x20, b'a' | b'e' | b'i' | b'o' | b'u'))
        .count() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_op() {
        assert_eq!(compute(Operation::Length, "abcd"), 4);
        assert_eq!(compute(Operation::Length, ""), 0);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert_eq!(compute(Operation::Length, "café"), 4);
    }

    #[test]
    fn test_vowels_case_insensitive() {
        assert_eq!(compute(Operation::Vowels, "AEIOUaeiou"), 10);
        assert_eq!(compute(Operation::Vowels, "hello"), 2); // e, o
        assert_eq!(compute(Operation::Vowels, "rhythm"), 0);
    }

    #[test]
    fn test_vowels_empty() {
        assert_eq!(compute(Operation::Vowels, ""), 0);
    }

    #[test]
    fn test_vowels_ascii_only() {
        // The accented é is not an ASCII vowel; only 'a' and 'e' count
        assert_eq!(compute(Operation::Vowels, "café"), 2);
        assert_eq!(compute(Operation::Vowels, "àèìòù"), 0);
    }

    #[test]
    fn test_vowels_punctuation_and_digits() {
        assert_eq!(compute(Operation::Vowels, "1234!?.,;"), 0);
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("length".parse::<Operation>().unwrap(), Operation::Length);
        assert_eq!("vowels".parse::<Operation>().unwrap(), Operation::Vowels);
    }

    #[test]
    fn test_operation_from_str_unknown() {
        let err = "nope".parse::<Operation>().unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedOperation(_)));
        assert_eq!(err.to_string(), "unknown op: nope");
    }

    #[test]
    fn test_operation_as_str_round_trip() {
        for op in [Operation::Length, Operation::Vowels] {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }
}
