//! Unordered hash set with value-returning set algebra.
//!
//! This module provides [`Set`], a mutable container of unique elements
//! backed by [`std::collections::HashSet`].
//!
//! # Overview
//!
//! `Set` separates two kinds of operations:
//!
//! - In-place mutators (`add`, `insert`, `delete`, `remove`, `delete_seq`)
//!   change the receiver and return nothing but an optional "changed" flag.
//! - Derived-set operations (`map`, `filter`, `union`, `intersection`)
//!   borrow their inputs and return a new, independently owned set.
//!
//! Iteration order is unspecified and may differ between runs.
//!
//! # Examples
//!
//! ```rust
//! use keyset::Set;
//!
//! let mut set: Set<i32> = [1, 2, 3, 2, 1].into_iter().collect();
//! assert_eq!(set.len(), 3);
//!
//! set.add([4, 5]);
//! set.delete(&[1, 5]);
//! assert!(!set.contains(&1));
//! assert!(set.contains(&4));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use keyset::Set;
//!
//! let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
//! let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
//!
//! let union = set_a.union(&set_b);               // {1, 2, 3, 4}
//! let intersection = set_a.intersection(&set_b); // {2, 3}
//!
//! assert_eq!(union.len(), 4);
//! assert_eq!(intersection.len(), 2);
//! ```

use std::borrow::Borrow;
use std::collections::{HashSet, hash_set};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitOr};

use crate::DefaultHashBuilder;
use crate::error::DuplicateElementError;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered set of unique elements.
///
/// Each distinct value of `E` (under `Eq`) appears at most once. `S` is the
/// hash builder; it defaults to [`DefaultHashBuilder`], which is selected by
/// Cargo features.
///
/// # Time Complexity
///
/// | Operation      | Complexity           |
/// |----------------|----------------------|
/// | `new`          | O(1)                 |
/// | `contains`     | O(1) expected        |
/// | `insert`       | O(1) expected        |
/// | `remove`       | O(1) expected        |
/// | `len`          | O(1)                 |
/// | `map`/`filter` | O(n)                 |
/// | `union`        | O(n + m)             |
/// | `intersection` | O(min(n, m))         |
///
/// # Examples
///
/// ```rust
/// use keyset::Set;
///
/// let set: Set<i32> = Set::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct Set<E, S = DefaultHashBuilder> {
    inner: HashSet<E, S>,
}

static_assertions::assert_impl_all!(Set<i32>: Clone, Default, fmt::Debug, fmt::Display, Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<E> Set<E> {
    /// Creates a new empty set with the default hash builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }
}

impl<E, S> Set<E, S> {
    /// Creates a new empty set that hashes its elements with `hasher`.
    ///
    /// Sets derived from this one by [`filter`](Self::filter),
    /// [`union`](Self::union) and [`intersection`](Self::intersection)
    /// reuse a clone of the same hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let mut set = Set::with_hasher(RandomState::new());
    /// set.insert("key");
    /// assert!(set.contains("key"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            inner: HashSet::with_hasher(hasher),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::set;
    ///
    /// let set = set![1, 2, 2, 3];
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns a reference to the set's hash builder.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Returns a lazy iterator over the elements of the set.
    ///
    /// Every element is produced exactly once, in unspecified order. Each
    /// call starts a fresh traversal. The iterator only borrows the set, so
    /// stopping early (`break`, `take`, `find`, or simply dropping it) needs
    /// no cleanup and leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<i32> = [10, 20, 30].into_iter().collect();
    ///
    /// // Stop after the first element
    /// let first = set.values().next();
    /// assert!(first.is_some());
    ///
    /// // A new traversal sees everything again
    /// assert_eq!(set.values().count(), 3);
    /// ```
    #[inline]
    pub fn values(&self) -> Values<'_, E> {
        Values {
            inner: self.inner.iter(),
        }
    }

    /// Alias for [`values`](Self::values).
    #[inline]
    pub fn iter(&self) -> Values<'_, E> {
        self.values()
    }
}

impl<E, S> Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<&str> = Set::singleton("only");
    /// assert_eq!(set.len(), 1);
    /// ```
    #[must_use]
    pub fn singleton(element: E) -> Self
    where
        S: Default,
    {
        let mut set = Self::with_hasher(S::default());
        set.inner.insert(element);
        set
    }

    /// Builds a set from every value of `sequence`, keeping each distinct
    /// value once.
    ///
    /// The sequence is drained completely. Unbounded producers must be
    /// bounded by the caller first (`take`, `take_while`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<i32> = Set::collect_from([1, 2, 3, 2, 1]);
    /// assert_eq!(set.len(), 3);
    ///
    /// let evens: Set<u64> = Set::collect_from((0..).step_by(2).take(5));
    /// assert!(evens.contains(&8));
    /// ```
    #[must_use]
    pub fn collect_from<I>(sequence: I) -> Self
    where
        I: IntoIterator<Item = E>,
        S: Default,
    {
        let mut set = Self::with_hasher(S::default());
        set.inner.extend(sequence);
        tracing::trace!(size = set.len(), "collected set");
        set
    }

    /// Builds a set from `sequence`, failing on the first value that was
    /// already seen.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateElementError`] holding the repeated value and its
    /// zero-based position in `sequence`. The rest of the sequence is not
    /// consumed in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let unique: Result<Set<char>, _> = Set::try_collect_unique("abc".chars());
    /// assert_eq!(unique.map(|set| set.len()), Ok(3));
    ///
    /// let repeated: Result<Set<char>, _> = Set::try_collect_unique("abca".chars());
    /// assert_eq!(repeated.unwrap_err().position, 3);
    /// ```
    pub fn try_collect_unique<I>(sequence: I) -> Result<Self, DuplicateElementError<E>>
    where
        I: IntoIterator<Item = E>,
        S: Default,
    {
        let mut set = Self::with_hasher(S::default());
        for (position, element) in sequence.into_iter().enumerate() {
            if set.inner.contains(&element) {
                tracing::trace!(position, "duplicate element while collecting unique set");
                return Err(DuplicateElementError { element, position });
            }
            set.inner.insert(element);
        }
        tracing::trace!(size = set.len(), "collected unique set");
        Ok(set)
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those of `E`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<String> = ["hello".to_string()].into_iter().collect();
    ///
    /// // Can use &str to look up String elements
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Inserts a single element, returning `true` if it was not present.
    ///
    /// Inserting an element that is already in the set leaves the set
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to insert
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1)); // Already present
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, element: E) -> bool {
        self.inner.insert(element)
    }

    /// Inserts zero or more elements. Elements already present are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add([1, 2, 3]);
    /// set.add([3, 3]);
    /// set.add([]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    pub fn add<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        self.inner.extend(elements);
    }

    /// Removes a single element, returning `true` if it was present.
    ///
    /// Removing an absent element is a no-op. As with
    /// [`contains`](Self::contains), any borrowed form of `E` is accepted.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to remove
    ///
    /// # Complexity
    ///
    /// O(1) expected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let mut set: Set<String> = ["alpha".to_string()].into_iter().collect();
    /// assert!(set.remove("alpha"));
    /// assert!(!set.remove("alpha")); // Already gone
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Removes zero or more elements given by reference. Absent elements
    /// are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::{Set, set};
    ///
    /// let mut set: Set<i32> = [1, 2, 3, 4].into_iter().collect();
    /// set.delete(&[2, 4, 9]);
    /// assert_eq!(set, set![1, 3]);
    /// ```
    pub fn delete<'a, Q, I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = &'a Q>,
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
    {
        for element in elements {
            self.inner.remove(element);
        }
    }

    /// Removes every value produced by `sequence`, draining it completely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::{Set, set};
    ///
    /// let mut set: Set<i32> = [1, 2, 3, 4].into_iter().collect();
    /// set.delete_seq(vec![2, 4]);
    /// assert_eq!(set, set![1, 3]);
    /// ```
    pub fn delete_seq<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = E>,
    {
        let before = self.len();
        for element in sequence {
            self.inner.remove(&element);
        }
        tracing::trace!(before, after = self.len(), "deleted sequence from set");
    }

    /// Returns a new set holding the image of every element under `function`.
    ///
    /// Distinct elements that map to the same value collapse into one, so
    /// the result may be smaller than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::{Set, set};
    ///
    /// let set: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let doubled = set.map(|x| x * 2);
    /// assert_eq!(doubled, set![2, 4, 6]);
    ///
    /// let collapsed = set.map(|_| 0);
    /// assert_eq!(collapsed.len(), 1);
    /// ```
    #[must_use]
    pub fn map<R, F>(&self, function: F) -> Set<R, S>
    where
        F: FnMut(&E) -> R,
        R: Hash + Eq,
        S: Default,
    {
        let mut result: Set<R, S> = Set::with_hasher(S::default());
        result.inner.extend(self.inner.iter().map(function));
        tracing::trace!(input = self.len(), output = result.len(), "mapped set");
        result
    }

    /// Like [`map`](Self::map), but `function` may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`. Elements after it are
    /// not visited. `self` is never modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::Set;
    ///
    /// let set: Set<&str> = ["1", "2", "3"].into_iter().collect();
    /// let parsed: Result<Set<i32>, _> = set.try_map(|text| text.parse::<i32>());
    /// assert_eq!(parsed.map(|set| set.len()), Ok(3));
    ///
    /// let broken: Set<&str> = ["1", "x"].into_iter().collect();
    /// assert!(broken.try_map(|text| text.parse::<i32>()).is_err());
    /// ```
    pub fn try_map<R, Err, F>(&self, function: F) -> Result<Set<R, S>, Err>
    where
        F: FnMut(&E) -> Result<R, Err>,
        R: Hash + Eq,
        S: Default,
    {
        let inner = self
            .inner
            .iter()
            .map(function)
            .collect::<Result<HashSet<R, S>, Err>>()?;
        Ok(Set { inner })
    }
}

impl<E, S> Set<E, S>
where
    E: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    /// Returns a new set with the elements that satisfy `predicate`.
    ///
    /// The predicate is called exactly once per element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::{Set, set};
    ///
    /// let set: Set<i32> = [1, 2, 3, 4].into_iter().collect();
    /// let evens = set.filter(|x| x % 2 == 0);
    /// assert_eq!(evens, set![2, 4]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        let mut result = Self::with_hasher(self.hasher().clone());
        result
            .inner
            .extend(self.inner.iter().filter(|element| predicate(*element)).cloned());
        tracing::trace!(input = self.len(), output = result.len(), "filtered set");
        result
    }

    /// Like [`filter`](Self::filter), but `predicate` may fail.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`. Elements after it
    /// are not visited.
    pub fn try_filter<Err, P>(&self, mut predicate: P) -> Result<Self, Err>
    where
        P: FnMut(&E) -> Result<bool, Err>,
    {
        let mut result = Self::with_hasher(self.hasher().clone());
        for element in &self.inner {
            if predicate(element)? {
                result.inner.insert(element.clone());
            }
        }
        Ok(result)
    }

    /// Returns every element that is in `self`, in `other`, or in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::{Set, set};
    ///
    /// let set_a: Set<i32> = [1, 2].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3].into_iter().collect();
    ///
    /// let union = set_a.union(&set_b);
    /// assert_eq!(union, set![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.inner.extend(other.inner.iter().cloned());
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            output = result.len(),
            "union of sets"
        );
        result
    }

    /// Returns every element present in both `self` and `other`.
    ///
    /// The smaller set is traversed and each element is looked up in the
    /// larger one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyset::{Set, set};
    ///
    /// let set_a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let set_b: Set<i32> = [2, 3, 4].into_iter().collect();
    ///
    /// let intersection = set_a.intersection(&set_b);
    /// assert_eq!(intersection, set![2, 3]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::with_hasher(self.hasher().clone());
        for element in smaller {
            if larger.contains(element) {
                result.inner.insert(element.clone());
            }
        }
        tracing::trace!(
            left = self.len(),
            right = other.len(),
            output = result.len(),
            "intersection of sets"
        );
        result
    }
}

impl<E, S> Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if every element of `self` is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.inner.is_superset(&other.inner)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.inner.is_disjoint(&other.inner)
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the elements of a [`Set`].
///
/// Created by [`Set::values`] and [`Set::iter`].
pub struct Values<'a, E> {
    inner: hash_set::Iter<'a, E>,
}

impl<'a, E> Iterator for Values<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> Clone for Values<'_, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E> ExactSizeIterator for Values<'_, E> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for Values<'_, E> {}

impl<E: fmt::Debug> fmt::Debug for Values<'_, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`Set`].
pub struct IntoValues<E> {
    inner: hash_set::IntoIter<E>,
}

impl<E> Iterator for IntoValues<E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> ExactSizeIterator for IntoValues<E> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<E> FusedIterator for IntoValues<E> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<E, S: Default> Default for Set<E, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<E, S> FromIterator<E> for Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::collect_from(iter)
    }
}

impl<E, S> Extend<E> for Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, E, S> Extend<&'a E> for Set<E, S>
where
    E: Hash + Eq + Copy + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a E>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

impl<E, S, const N: usize> From<[E; N]> for Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(elements: [E; N]) -> Self {
        Self::collect_from(elements)
    }
}

impl<E, S> From<Vec<E>> for Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from(elements: Vec<E>) -> Self {
        Self::collect_from(elements)
    }
}

impl<E, S> IntoIterator for Set<E, S> {
    type Item = E;
    type IntoIter = IntoValues<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoValues {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, E, S> IntoIterator for &'a Set<E, S> {
    type Item = &'a E;
    type IntoIter = Values<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}

impl<E, S> PartialEq for Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E, S> Eq for Set<E, S>
where
    E: Hash + Eq,
    S: BuildHasher,
{
}

impl<E, S> BitOr<&Set<E, S>> for &Set<E, S>
where
    E: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<E, S>;

    /// Returns the union of `self` and `other` as a new set.
    fn bitor(self, other: &Set<E, S>) -> Set<E, S> {
        self.union(other)
    }
}

impl<E, S> BitAnd<&Set<E, S>> for &Set<E, S>
where
    E: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    type Output = Set<E, S>;

    /// Returns the intersection of `self` and `other` as a new set.
    fn bitand(self, other: &Set<E, S>) -> Set<E, S> {
        self.intersection(other)
    }
}

impl<E: fmt::Debug, S> fmt::Debug for Set<E, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.iter()).finish()
    }
}

/// Renders the set as `{a b c}`: elements separated by single spaces, in
/// iteration order. The order is unspecified, so the output is a debugging
/// aid and not a stable format.
impl<E: fmt::Display, S> fmt::Display for Set<E, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        for (index, element) in self.inner.iter().enumerate() {
            if index > 0 {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{element}")?;
        }
        formatter.write_str("}")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_set() {
        let set: Set<i32> = Set::new();
        assert_eq!(format!("{set}"), "{}");
    }

    #[rstest]
    fn test_display_single_element_set() {
        let set: Set<i32> = Set::singleton(42);
        assert_eq!(format!("{set}"), "{42}");
    }

    #[rstest]
    fn test_display_uses_single_space_separator() {
        let set: Set<i32> = [10, 20].into_iter().collect();
        let display = format!("{set}");
        assert!(display == "{10 20}" || display == "{20 10}", "got {display}");
    }

    #[rstest]
    fn test_debug_uses_set_notation() {
        let set: Set<i32> = Set::singleton(7);
        assert_eq!(format!("{set:?}"), "{7}");
    }

    // =========================================================================
    // Core Operations
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let set: Set<i32> = Set::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[rstest]
    fn test_insert_reports_novelty() {
        let mut set: Set<i32> = Set::new();
        assert!(set.insert(1));
        assert!(!set.insert(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_remove_reports_presence() {
        let mut set: Set<i32> = Set::singleton(1);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_filter_calls_predicate_once_per_element() {
        let set: Set<i32> = (0..10).collect();
        let calls = Cell::new(0);
        let _ = set.filter(|_| {
            calls.set(calls.get() + 1);
            true
        });
        assert_eq!(calls.get(), 10);
    }

    #[rstest]
    fn test_derived_sets_reuse_hasher_type() {
        use std::hash::{BuildHasherDefault, DefaultHasher};

        type Fixed = BuildHasherDefault<DefaultHasher>;
        let set: Set<i32, Fixed> = [1, 2, 3].into_iter().collect();
        let filtered: Set<i32, Fixed> = set.filter(|x| *x > 1);
        let mapped: Set<i64, Fixed> = set.map(|x| i64::from(*x));
        assert_eq!(filtered.len(), 2);
        assert_eq!(mapped.len(), 3);
    }

    #[rstest]
    fn test_intersection_walks_smaller_side_symmetrically() {
        let small: Set<i32> = [5, 6].into_iter().collect();
        let large: Set<i32> = (0..100).collect();
        assert_eq!(small.intersection(&large), large.intersection(&small));
        assert_eq!(small.intersection(&large), small);
    }

    #[rstest]
    fn test_values_is_exact_size() {
        let set: Set<i32> = (0..5).collect();
        let mut values = set.values();
        assert_eq!(values.len(), 5);
        values.next();
        assert_eq!(values.len(), 4);
    }
}
