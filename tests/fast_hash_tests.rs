//! Tests for hash builder selection.
//!
//! The default hash builder depends on the `fxhash` and `ahash` feature
//! flags; explicit hashers can be supplied per set. Set semantics must not
//! depend on either choice.

use keyset::{DefaultHashBuilder, Set};
use rstest::rstest;
use std::hash::{BuildHasherDefault, DefaultHasher};

type FixedState = BuildHasherDefault<DefaultHasher>;

#[rstest]
fn test_default_hash_builder_set_operations() {
    let set_a: Set<i32, DefaultHashBuilder> = (0..10).collect();
    let set_b: Set<i32, DefaultHashBuilder> = (5..15).collect();

    assert_eq!(set_a.union(&set_b).len(), 15);
    assert_eq!(set_a.intersection(&set_b).len(), 5);
}

#[rstest]
fn test_explicit_hasher_set_operations() {
    let mut set: Set<String, FixedState> = Set::with_hasher(FixedState::default());
    set.add(["alpha".to_string(), "beta".to_string(), "alpha".to_string()]);

    assert_eq!(set.len(), 2);
    assert!(set.contains("alpha"));

    let filtered = set.filter(|word| word.starts_with('b'));
    assert_eq!(filtered.len(), 1);
    assert!(filtered.contains("beta"));
}

#[rstest]
fn test_sets_with_independent_random_states_compare_equal() {
    use std::collections::hash_map::RandomState;

    let mut first = Set::with_hasher(RandomState::new());
    let mut second = Set::with_hasher(RandomState::new());
    first.add([1, 2, 3]);
    second.add([3, 2, 1]);

    assert_eq!(first, second);
    assert_eq!(first.union(&second), first);
}

#[rstest]
fn test_derived_sets_carry_hasher_instance() {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let mut set = Set::with_hasher(RandomState::new());
    set.add(0..20);
    let other = set.filter(|x| x % 3 == 0);

    let filtered = set.filter(|x| x % 2 == 0);
    let union = set.union(&other);
    let intersection = set.intersection(&other);

    for key in [0, 7, 19, 1_000] {
        let expected = set.hasher().hash_one(key);
        assert_eq!(filtered.hasher().hash_one(key), expected);
        assert_eq!(union.hasher().hash_one(key), expected);
        assert_eq!(intersection.hasher().hash_one(key), expected);
    }
}

#[rstest]
fn test_fixed_state_renders_identically_across_instances() {
    let first: Set<i32, FixedState> = (0..20).collect();
    let second: Set<i32, FixedState> = (0..20).collect();

    assert_eq!(first.to_string(), second.to_string());
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fxhash_is_default() {
    let set: Set<i32> = Set::new();
    let _: &rustc_hash::FxBuildHasher = set.hasher();
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[rstest]
fn test_ahash_is_default() {
    let set: Set<i32> = Set::new();
    let _: &ahash::RandomState = set.hasher();
}
