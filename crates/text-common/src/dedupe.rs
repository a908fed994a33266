use std::hash::Hash;

use rustc_hash::FxHashSet;

/// Remove duplicates, keeping each value at its first position.
pub fn dedupe<T>(input: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = FxHashSet::default();
    seen.reserve(input.len());
    let mut out = Vec::with_capacity(input.len());
    for value in input {
        if seen.insert(value) {
            out.push(value.clone());
        }
    }
    out
}
