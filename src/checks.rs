//! Assertion helpers shared by the scenarios.
//!
//! Each helper checks one property and, on failure, returns a [`Violation`]
//! naming the field, its position and the offending value.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{field} at index {index} should not be empty")]
    EmptyField { field: &'static str, index: usize },
    #[error("{field} at index {index} is {value}, expected more than {threshold}")]
    NotAbove {
        field: &'static str,
        index: usize,
        value: u64,
        threshold: u64,
    },
    #[error("{field} is {value}, expected at least {minimum}")]
    BelowMinimum {
        field: &'static str,
        value: u64,
        minimum: u64,
    },
    #[error("expected {expected} {field}, found {actual}")]
    CountMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{field} out of order at index {index}: {current} is earlier than {previous}")]
    OutOfOrder {
        field: &'static str,
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },
    #[error("{field} at index {index} is {actual}, expected {expected}")]
    UnexpectedValue {
        field: &'static str,
        index: usize,
        actual: String,
        expected: String,
    },
}

/// Require `value` to contain something other than whitespace.
///
/// # Errors
///
/// Returns [`Violation::EmptyField`] for blank strings.
pub fn ensure_non_empty(field: &'static str, index: usize, value: &str) -> Result<(), Violation> {
    if value.trim().is_empty() {
        Err(Violation::EmptyField { field, index })
    } else {
        Ok(())
    }
}

/// Require `value` to be strictly greater than `threshold`.
///
/// # Errors
///
/// Returns [`Violation::NotAbove`] when `value <= threshold`.
pub fn ensure_above(
    field: &'static str,
    index: usize,
    value: u64,
    threshold: u64,
) -> Result<(), Violation> {
    if value > threshold {
        Ok(())
    } else {
        Err(Violation::NotAbove {
            field,
            index,
            value,
            threshold,
        })
    }
}

/// Require `value >= minimum`.
///
/// # Errors
///
/// Returns [`Violation::BelowMinimum`] otherwise.
pub fn ensure_at_least(field: &'static str, value: u64, minimum: u64) -> Result<(), Violation> {
    if value >= minimum {
        Ok(())
    } else {
        Err(Violation::BelowMinimum {
            field,
            value,
            minimum,
        })
    }
}

/// Require exactly `expected` items.
///
/// # Errors
///
/// Returns [`Violation::CountMismatch`] otherwise.
pub fn ensure_count(field: &'static str, actual: usize, expected: usize) -> Result<(), Violation> {
    if actual == expected {
        Ok(())
    } else {
        Err(Violation::CountMismatch {
            field,
            expected,
            actual,
        })
    }
}

/// Require `timestamps` to be non-decreasing.
///
/// Equal neighbours are accepted. The reported index is that of the later
/// element of the first offending pair.
///
/// # Errors
///
/// Returns [`Violation::OutOfOrder`] for the first pair with
/// `timestamps[i - 1] > timestamps[i]`.
pub fn ensure_non_decreasing(
    field: &'static str,
    timestamps: &[DateTime<Utc>],
) -> Result<(), Violation> {
    timestamps
        .windows(2)
        .enumerate()
        .find_map(|(i, pair)| match pair {
            [previous, current] if previous > current => Some(Violation::OutOfOrder {
                field,
                index: i + 1,
                previous: *previous,
                current: *current,
            }),
            _ => None,
        })
        .map_or(Ok(()), Err)
}

/// Require `actual == expected`, reporting both as strings.
///
/// # Errors
///
/// Returns [`Violation::UnexpectedValue`] when they differ.
pub fn ensure_equal<T>(
    field: &'static str,
    index: usize,
    actual: &T,
    expected: &T,
) -> Result<(), Violation>
where
    T: PartialEq + ToString + ?Sized,
{
    if actual == expected {
        Ok(())
    } else {
        Err(Violation::UnexpectedValue {
            field,
            index,
            actual: actual.to_string(),
            expected: expected.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 1, day, 12, 0, 0)
            .single()
            .expect("valid date")
    }

    #[rstest]
    #[case("react", true)]
    #[case("", false)]
    #[case("   ", false)]
    fn ensure_non_empty_cases(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(ensure_non_empty("node.name", 3, value).is_ok(), ok);
    }

    #[test]
    fn empty_field_message_names_field_and_index() {
        let err = ensure_non_empty("node.owner.login", 7, "").expect_err("empty");
        assert_eq!(err.to_string(), "node.owner.login at index 7 should not be empty");
    }

    #[rstest]
    #[case(10_001, true)]
    #[case(10_000, false)]
    #[case(9_999, false)]
    fn ensure_above_is_exclusive(#[case] value: u64, #[case] ok: bool) {
        assert_eq!(
            ensure_above("node.stargazers.totalCount", 0, value, 10_000).is_ok(),
            ok
        );
    }

    #[test]
    fn not_above_message_names_value() {
        let err = ensure_above("node.stargazers.totalCount", 4, 9_500, 10_000)
            .expect_err("below threshold");
        assert_eq!(
            err.to_string(),
            "node.stargazers.totalCount at index 4 is 9500, expected more than 10000"
        );
    }

    #[rstest]
    #[case(20, true)]
    #[case(450_000, true)]
    #[case(19, false)]
    fn ensure_at_least_is_inclusive(#[case] value: u64, #[case] ok: bool) {
        assert_eq!(ensure_at_least("search.repositoryCount", value, 20).is_ok(), ok);
    }

    #[test]
    fn count_mismatch_reports_both_counts() {
        let err = ensure_count("search.edges", 19, 20).expect_err("short page");
        assert_eq!(
            err,
            Violation::CountMismatch {
                field: "search.edges",
                expected: 20,
                actual: 19,
            }
        );
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![at(1)])]
    #[case(vec![at(1), at(1), at(2), at(9)])]
    fn non_decreasing_sequences_pass(#[case] timestamps: Vec<DateTime<Utc>>) {
        assert!(ensure_non_decreasing("node.createdAt", &timestamps).is_ok());
    }

    #[test]
    fn out_of_order_reports_first_offending_pair() {
        let timestamps = [at(1), at(3), at(2), at(1)];
        let err = ensure_non_decreasing("node.createdAt", &timestamps).expect_err("unsorted");
        assert_eq!(
            err,
            Violation::OutOfOrder {
                field: "node.createdAt",
                index: 2,
                previous: at(3),
                current: at(2),
            }
        );
    }

    #[test]
    fn ensure_equal_reports_actual_and_expected() {
        assert!(ensure_equal("node.state", 0, "OPEN", "OPEN").is_ok());
        let err = ensure_equal("node.state", 5, "CLOSED", "OPEN").expect_err("closed issue");
        assert_eq!(err.to_string(), "node.state at index 5 is CLOSED, expected OPEN");
    }
}
