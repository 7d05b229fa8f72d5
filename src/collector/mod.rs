//! Generalized reductions.
//!
//! A [`Collector`] describes a fold as three functions: a supplier creating
//! the running accumulation, an accumulator folding one element into it, and
//! a finisher converting the accumulation into the returned shape. Collectors
//! are immutable and cheap to clone, so one value can drive any number of
//! [`Stream::collect`](crate::Stream::collect) calls, and collectors nest
//! (see [`grouping_by`]).

mod builtin;

pub use builtin::{counting, grouping_by, to_map, to_map_with, to_vec};

use std::fmt;
use std::sync::Arc;

type Supplier<A> = Arc<dyn Fn() -> A + Send + Sync>;
type Accumulator<T, A> = Arc<dyn Fn(A, T) -> A + Send + Sync>;
type Finisher<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// A reusable description of a fold from elements `T` into a result `R`,
/// through an accumulation of type `A`.
///
/// For each collect run the supplier is called exactly once, the accumulator
/// once per element in arrival order, and the finisher exactly once at the
/// end. The accumulator receives the running accumulation by value and
/// returns the next one, which may be the same container or a new value.
///
/// ```rust
/// use sugars_stream::{Collector, Stream};
///
/// let sum = Collector::new(|| 0i64, |acc, n: i64| acc + n);
/// assert_eq!(Stream::of(1..=4).collect(&sum), 10);
/// assert_eq!(Stream::of(vec![5, 5]).collect(&sum), 10);
/// ```
pub struct Collector<T, A, R = A> {
    supplier: Supplier<A>,
    accumulator: Accumulator<T, A>,
    finisher: Finisher<A, R>,
}

impl<T: 'static, A: 'static> Collector<T, A, A> {
    /// A collector whose finisher is the identity.
    pub fn new<S, F>(supplier: S, accumulator: F) -> Self
    where
        S: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, T) -> A + Send + Sync + 'static,
    {
        Self::with_finisher(supplier, accumulator, crate::function::identity)
    }
}

impl<T: 'static, A: 'static, R: 'static> Collector<T, A, R> {
    /// A collector from all three functions.
    pub fn with_finisher<S, F, G>(supplier: S, accumulator: F, finisher: G) -> Self
    where
        S: Fn() -> A + Send + Sync + 'static,
        F: Fn(A, T) -> A + Send + Sync + 'static,
        G: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            supplier: Arc::new(supplier),
            accumulator: Arc::new(accumulator),
            finisher: Arc::new(finisher),
        }
    }

    /// Post-compose `f` onto the finisher.
    ///
    /// ```rust
    /// use sugars_stream::{collector::to_vec, Stream};
    ///
    /// let longest = to_vec::<&str>().and_then(|words| words.iter().map(|w| w.len()).max());
    /// assert_eq!(Stream::of(vec!["go", "rust"]).collect(&longest), Some(4));
    /// ```
    pub fn and_then<R2, G>(self, f: G) -> Collector<T, A, R2>
    where
        R2: 'static,
        G: Fn(R) -> R2 + Send + Sync + 'static,
    {
        let finisher = self.finisher;
        Collector {
            supplier: self.supplier,
            accumulator: self.accumulator,
            finisher: Arc::new(move |acc| f(finisher(acc))),
        }
    }
}

impl<T, A, R> Collector<T, A, R> {
    /// Create a fresh accumulation.
    #[inline]
    pub fn supply(&self) -> A {
        (self.supplier)()
    }

    /// Fold one element into `acc`.
    #[inline]
    pub fn accumulate(&self, acc: A, item: T) -> A {
        (self.accumulator)(acc, item)
    }

    /// Convert a completed accumulation into the result.
    #[inline]
    pub fn finish(&self, acc: A) -> R {
        (self.finisher)(acc)
    }

    /// Run the whole fold over `items` in order.
    pub fn collect_from<I>(&self, items: I) -> R
    where
        I: IntoIterator<Item = T>,
    {
        let acc = items
            .into_iter()
            .fold(self.supply(), |acc, item| self.accumulate(acc, item));
        self.finish(acc)
    }
}

impl<T, A, R> Clone for Collector<T, A, R> {
    fn clone(&self) -> Self {
        Self {
            supplier: Arc::clone(&self.supplier),
            accumulator: Arc::clone(&self.accumulator),
            finisher: Arc::clone(&self.finisher),
        }
    }
}

impl<T, A, R> fmt::Debug for Collector<T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector")
            .field("accumulation", &std::any::type_name::<A>())
            .field("result", &std::any::type_name::<R>())
            .finish_non_exhaustive()
    }
}
