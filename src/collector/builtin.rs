// -----------------------------------------------------------------------------
// Built-in collectors
// -----------------------------------------------------------------------------

use super::Collector;
use hashbrown::HashMap;
use std::hash::Hash;

/// Collect elements into a `Vec` in arrival order.
pub fn to_vec<T: 'static>() -> Collector<T, Vec<T>> {
    Collector::new(Vec::new, |mut items: Vec<T>, item| {
        items.push(item);
        items
    })
}

/// Count elements.
pub fn counting<T: 'static>() -> Collector<T, usize> {
    Collector::new(|| 0, |count, _item: T| count + 1)
}

/// Collect elements into a map where each element is both key and value.
///
/// Later duplicates overwrite earlier ones.
pub fn to_map<T>() -> Collector<T, HashMap<T, T>>
where
    T: Eq + Hash + Clone + 'static,
{
    to_map_with(T::clone, crate::function::identity)
}

/// Collect elements into a map of `key_mapper(element) -> value_mapper(element)`.
///
/// Duplicate keys keep the last value written.
///
/// ```rust
/// use sugars_stream::{collector::to_map_with, Stream};
///
/// let map = Stream::of(vec![0]).collect(&to_map_with(|n: &i32| n + 1, |n: i32| n + 1));
/// assert_eq!(map.get(&1), Some(&1));
/// ```
pub fn to_map_with<T, K, V, KF, VF>(
    key_mapper: KF,
    value_mapper: VF,
) -> Collector<T, HashMap<K, V>>
where
    T: 'static,
    K: Eq + Hash + 'static,
    V: 'static,
    KF: Fn(&T) -> K + Send + Sync + 'static,
    VF: Fn(T) -> V + Send + Sync + 'static,
{
    Collector::new(HashMap::new, move |mut map: HashMap<K, V>, item: T| {
        let key = key_mapper(&item);
        map.insert(key, value_mapper(item));
        map
    })
}

/// Group elements by `classifier`, folding each group with `downstream`.
///
/// Each group's accumulation is created lazily by the downstream supplier the
/// first time its key is seen, and every group is passed through the
/// downstream finisher at the end. Because `downstream` is itself a
/// collector, groupings nest.
///
/// ```rust
/// use sugars_stream::{collector::{grouping_by, to_vec}, Stream};
///
/// let by_parity = Stream::of(1..=5).collect(&grouping_by(|n: &i32| n % 2, to_vec()));
/// assert_eq!(by_parity[&1], vec![1, 3, 5]);
/// assert_eq!(by_parity[&0], vec![2, 4]);
/// ```
pub fn grouping_by<T, K, A, R, F>(
    classifier: F,
    downstream: Collector<T, A, R>,
) -> Collector<T, HashMap<K, A>, HashMap<K, R>>
where
    T: 'static,
    K: Eq + Hash + 'static,
    A: 'static,
    R: 'static,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    let folding = downstream.clone();
    Collector::with_finisher(
        HashMap::new,
        move |mut groups: HashMap<K, A>, item: T| {
            let key = classifier(&item);
            let acc = match groups.remove(&key) {
                Some(acc) => acc,
                None => folding.supply(),
            };
            groups.insert(key, folding.accumulate(acc, item));
            groups
        },
        move |groups: HashMap<K, A>| {
            groups
                .into_iter()
                .map(|(key, acc)| (key, downstream.finish(acc)))
                .collect()
        },
    )
}
