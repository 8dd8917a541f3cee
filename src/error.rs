//! Error types for fallible set construction.
//!
//! The core set operations are total and never fail. The only error this
//! crate defines itself comes from [`Set::try_collect_unique`], which
//! rejects input sequences that contain the same element twice.
//!
//! [`Set::try_collect_unique`]: crate::Set::try_collect_unique

use std::fmt;

/// Represents a duplicate value found while collecting a sequence that was
/// expected to contain every element at most once.
///
/// # Examples
///
/// ```rust
/// use keyset::Set;
/// use keyset::error::DuplicateElementError;
///
/// let result: Result<Set<i32>, _> = Set::try_collect_unique([1, 2, 1]);
/// assert_eq!(
///     result.unwrap_err(),
///     DuplicateElementError { element: 1, position: 2 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateElementError<E> {
    /// The value that was already present.
    pub element: E,
    /// The zero-based position of the repeated value in the input sequence.
    pub position: usize,
}

impl<E> DuplicateElementError<E> {
    /// Consumes the error and returns the duplicate value.
    pub fn into_element(self) -> E {
        self.element
    }
}

impl<E: fmt::Debug> fmt::Display for DuplicateElementError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "duplicate element {:?} at position {}",
            self.element, self.position
        )
    }
}

impl<E: fmt::Debug> std::error::Error for DuplicateElementError<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_duplicate_element_error_display() {
        let error = DuplicateElementError {
            element: 3,
            position: 5,
        };
        assert_eq!(format!("{error}"), "duplicate element 3 at position 5");
    }

    #[rstest]
    fn test_duplicate_element_error_display_string() {
        let error = DuplicateElementError {
            element: "alpha".to_string(),
            position: 0,
        };
        assert_eq!(
            format!("{error}"),
            "duplicate element \"alpha\" at position 0"
        );
    }

    #[rstest]
    fn test_duplicate_element_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(DuplicateElementError {
            element: 1_u8,
            position: 1,
        });
        assert_eq!(error.to_string(), "duplicate element 1 at position 1");
    }

    #[rstest]
    fn test_into_element() {
        let error = DuplicateElementError {
            element: 'x',
            position: 2,
        };
        assert_eq!(error.into_element(), 'x');
    }
}
