//! Literal construction macro.

/// Creates a [`Set`](crate::Set) containing the given elements.
///
/// Repeated elements are kept once. With no arguments the macro yields an
/// empty set, so the element type usually needs an annotation.
///
/// # Examples
///
/// ```rust
/// use keyset::{Set, set};
///
/// let numbers = set![1, 2, 3, 2, 1];
/// assert_eq!(numbers.len(), 3);
/// assert!(numbers.contains(&2));
///
/// let empty: Set<i32> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::Set::new();
        $(
            set.insert($element);
        )+
        set
    }};
}

#[cfg(test)]
mod tests {
    use crate::Set;
    use rstest::rstest;

    #[rstest]
    fn test_set_macro_empty() {
        let set: Set<i32> = set![];
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_set_macro_deduplicates() {
        let set = set![1, 1, 2, 3, 3, 3];
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(set.contains(&3));
    }

    #[rstest]
    fn test_set_macro_trailing_comma() {
        let set = set!["a", "b",];
        assert_eq!(set.len(), 2);
    }
}
