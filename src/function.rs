//! Function shapes used by pipeline stages, and the predicate combinators.
//!
//! Stages accept plain closures. The aliases below name the boxed forms for
//! callers that need to store operators in collections or struct fields.

use crate::model::Model;

/// One element in, one element out. Used by `map`.
pub type Operator<T, U = T> = Box<dyn FnMut(T) -> U + Send>;

/// One element in, zero or more out. Used by `flat_map`.
pub type MultiOperator<T, U = T> = Box<dyn FnMut(T) -> Vec<U> + Send>;

/// Two elements in, one out. The shape of a collector's accumulator.
pub type BiOperator<A, T = A> = Box<dyn Fn(A, T) -> A + Send + Sync>;

/// Side-effecting observer. Used by `peek`.
pub type Consumer<T> = Box<dyn FnMut(&T) + Send>;

/// A boolean test over an element.
///
/// Blanket-implemented for every `Fn(&T) -> bool`, so any closure is a
/// predicate. The combinators take predicates by value and return new
/// predicates; none of them hold mutable state, so a combined predicate can
/// be cloned and reused across stages and pipelines.
///
/// ```rust
/// use sugars_stream::{Predicate, Stream};
///
/// let big = |n: &i32| *n > 5;
/// let even = |n: &i32| n % 2 == 0;
///
/// let picked = Stream::of(vec![4, 2, 7, 8]).filter(big.and(even)).to_vec();
/// assert_eq!(picked, vec![8]);
/// ```
pub trait Predicate<T: ?Sized + 'static>: Fn(&T) -> bool {
    /// Evaluate the predicate.
    #[inline]
    fn test(&self, item: &T) -> bool {
        self(item)
    }

    /// True when both predicates hold.
    fn and<P>(self, other: P) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
    where
        Self: Sized + Clone + Send + Sync + 'static,
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        move |item: &T| self(item) && other(item)
    }

    /// True when either predicate holds.
    fn or<P>(self, other: P) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
    where
        Self: Sized + Clone + Send + Sync + 'static,
        P: Fn(&T) -> bool + Clone + Send + Sync + 'static,
    {
        move |item: &T| self(item) || other(item)
    }

    /// The negation of this predicate.
    fn not(self) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
    where
        Self: Sized + Clone + Send + Sync + 'static,
    {
        move |item: &T| !self(item)
    }
}

impl<T: ?Sized + 'static, F> Predicate<T> for F where F: Fn(&T) -> bool {}

/// Matches elements that [`Model::equals`] `value`.
pub fn is_equal<T>(value: T) -> impl Fn(&T) -> bool + Clone + Send + Sync + 'static
where
    T: Model + Clone + Send + Sync + 'static,
{
    move |item: &T| item.equals(&value)
}

/// Matches everything.
pub fn always<T: ?Sized + 'static>() -> impl Fn(&T) -> bool + Copy + Send + Sync + 'static {
    |_: &T| true
}

/// Matches nothing.
pub fn never<T: ?Sized + 'static>() -> impl Fn(&T) -> bool + Copy + Send + Sync + 'static {
    |_: &T| false
}

/// The identity transform, the default key and value mapper of
/// [`to_map`](crate::collector::to_map).
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
