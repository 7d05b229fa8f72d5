// -----------------------------------------------------------------------------
// Container elements: equality defers to the members' equality.
// -----------------------------------------------------------------------------

use super::Model;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{BuildHasher, Hash};

impl<T: Model> Model for [T] {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equals(b))
    }
}

impl<T: Model> Model for Vec<T> {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Model, const N: usize> Model for [T; N] {
    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.as_slice().equals(other.as_slice())
    }
}

impl<T: Model> Model for std::collections::VecDeque<T> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.equals(b))
    }
}

// Maps: same key set, pairwise-equal values, iteration order irrelevant.

impl<K, V, S> Model for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Model,
    S: BuildHasher,
{
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v.equals(w)))
    }
}

impl<K, V, S> Model for std::collections::HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Model,
    S: BuildHasher,
{
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v.equals(w)))
    }
}

impl<K: Ord, V: Model> Model for BTreeMap<K, V> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v.equals(w)))
    }
}

// Sets: members are keys, so key equality is all there is.

impl<T: Eq + Hash, S: BuildHasher> Model for hashbrown::HashSet<T, S> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Eq + Hash, S: BuildHasher> Model for std::collections::HashSet<T, S> {
    fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Ord> Model for BTreeSet<T> {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! model_tuple {
    ($(($($name:ident . $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: Model),+> Model for ($($name,)+) {
                #[inline]
                fn equals(&self, other: &Self) -> bool {
                    $(self.$idx.equals(&other.$idx))&&+
                }
            }
        )+
    };
}

model_tuple!(
    (A.0),
    (A.0, B.1),
    (A.0, B.1, C.2),
    (A.0, B.1, C.2, D.3),
);

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::{HashMap, HashSet};

    #[test]
    fn test_sequence_equality_is_ordered() {
        assert!(vec![1, 2, 3].equals(&vec![1, 2, 3]));
        assert!(!vec![1, 2, 3].equals(&vec![3, 2, 1]));
        assert!(!vec![1, 2].equals(&vec![1, 2, 3]));
        assert!(Vec::<i32>::new().equals(&Vec::new()));
    }

    #[test]
    fn test_nested_sequence_defers_to_members() {
        let a = vec![vec![Some(1)], vec![None]];
        let b = vec![vec![Some(1)], vec![None]];
        let c = vec![vec![Some(1)], vec![Some(2)]];
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
    }

    #[test]
    fn test_map_equality_ignores_order() {
        let a: HashMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let b: HashMap<&str, i32> = [("y", 2), ("x", 1)].into_iter().collect();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_map_equality_is_symmetric_on_key_sets() {
        let small: HashMap<i32, i32> = [(1, 1)].into_iter().collect();
        let large: HashMap<i32, i32> = [(1, 1), (2, 2)].into_iter().collect();
        assert!(!small.equals(&large));
        assert!(!large.equals(&small));
    }

    #[test]
    fn test_map_values_compared_with_equals() {
        let a: BTreeMap<u8, f64> = [(1, f64::NAN)].into_iter().collect();
        let b: BTreeMap<u8, f64> = [(1, f64::NAN)].into_iter().collect();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_set_equality() {
        let a: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let b: HashSet<i32> = [3, 1, 2].into_iter().collect();
        let c: HashSet<i32> = [1, 2].into_iter().collect();
        assert!(a.equals(&b));
        assert!(!a.equals(&c));
    }

    #[test]
    fn test_tuple_equality() {
        assert!((1, "a").equals(&(1, "a")));
        assert!(!(1, "a", 2.0).equals(&(1, "a", 3.0)));
    }
}
