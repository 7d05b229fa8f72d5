//! Terminal operations. All of them run in the calling thread.

use super::stage::FaultSlot;
use super::Stream;
use crate::collector::{self, Collector};
use crate::model::Model;
use crate::optional::Optional;
use crossbeam::channel::Receiver;
use std::iter::FusedIterator;

/// Blocking iterator over the elements remaining in a [`Stream`].
///
/// Once the channel is exhausted the iterator keeps returning `None`. If any
/// stage of the pipeline panicked, the panic is resumed in the thread that
/// observes the end of the stream. Dropping the iterator early cancels the
/// stages behind it.
pub struct StreamIter<T> {
    receiver: Option<Receiver<T>>,
    faults: FaultSlot,
}

impl<T> Iterator for StreamIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let receiver = self.receiver.as_ref()?;
        match receiver.recv() {
            Ok(item) => Some(item),
            Err(_) => {
                self.receiver = None;
                self.faults.rethrow();
                None
            }
        }
    }
}

impl<T> FusedIterator for StreamIter<T> {}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;

    fn into_iter(self) -> StreamIter<T> {
        StreamIter {
            receiver: self.receiver,
            faults: self.faults,
        }
    }
}

impl<T: Send + 'static> Stream<T> {
    /// Whether any element satisfies `pred`. Stops at the first match; an
    /// empty stream yields `false`.
    pub fn any_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().any(|item| pred(&item))
    }

    /// Whether every element satisfies `pred`. Stops at the first miss; an
    /// empty stream yields `true`.
    pub fn all_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter().all(|item| pred(&item))
    }

    /// Whether no element satisfies `pred`. Stops at the first match; an
    /// empty stream yields `true`.
    pub fn none_match<P>(self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.into_iter().any(|item| pred(&item))
    }

    /// The first element satisfying `pred`, or an empty [`Optional`].
    pub fn find_first<P>(self, mut pred: P) -> Optional<T>
    where
        P: FnMut(&T) -> bool,
    {
        let found = self.into_iter().find(|item| pred(item));
        Optional::of_nullable(found)
    }

    /// Number of elements remaining.
    pub fn count(self) -> usize {
        self.into_iter().count()
    }

    /// Call `consumer` on every element in arrival order.
    pub fn for_each<C>(self, consumer: C)
    where
        C: FnMut(T),
    {
        self.into_iter().for_each(consumer)
    }

    /// Fold every element with `collector` and return its finished result.
    pub fn collect<A, R>(self, collector: &Collector<T, A, R>) -> R {
        collector.collect_from(self)
    }

    /// Collect into a `Vec`.
    pub fn to_vec(self) -> Vec<T> {
        self.collect(&collector::to_vec())
    }
}

impl<T: Model + Send + 'static> Stream<T> {
    /// Whether any element [`Model::equals`] `value`.
    pub fn contains(self, value: &T) -> bool {
        self.any_match(|item| item.equals(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_iter_is_fused_after_end() {
        let mut iter = Stream::of(vec![1]).into_iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_drained_channel_never_replays() {
        let (tx, rx) = channel::bounded(0);
        let producer = std::thread::spawn(move || {
            for n in 1..=3 {
                tx.send(n).unwrap();
            }
        });

        let first = Stream::from_receiver(rx.clone());
        assert_eq!(first.count(), 3);
        producer.join().unwrap();

        let again = Stream::from_receiver(rx);
        assert_eq!(again.count(), 0);
    }

    #[test]
    fn test_contains_uses_model_equality() {
        assert!(Stream::of(vec![Some(1), None]).contains(&None));
        assert!(!Stream::of(vec![Some(1)]).contains(&Some(2)));
    }
}
