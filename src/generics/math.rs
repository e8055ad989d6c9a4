//! Generic functions whose bounds stand in for `IComparable`/`IEquatable`
//! style constraints: a type without `Ord` simply can't be passed to `max`.

/// Largest item, scanning left to right.
///
/// Only a strictly greater item replaces the current best, so among equal
/// maxima the earliest one wins. `None` for an empty slice.
pub fn max<T: Ord>(items: &[T]) -> Option<&T> {
    let (first, rest) = items.split_first()?;
    let mut maximum = first;
    for item in rest {
        if item > maximum {
            maximum = item;
        }
    }
    Some(maximum)
}

pub fn contains<T: PartialEq>(target: &T, items: &[T]) -> bool {
    for item in items {
        if target == item {
            return true;
        }
    }
    false
}
