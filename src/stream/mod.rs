//! The pipeline stage engine.
//!
//! A [`Stream`] is a handle over the receiving end of one channel. Each
//! intermediate operation spawns exactly one stage thread that reads from the
//! handle's channel and writes to a fresh one, and returns a new handle over
//! that fresh channel. Nothing flows until a terminal operation (or an eager
//! barrier such as [`Stream::distinct`]) starts draining: with the default
//! rendezvous channels every send waits for a matching receive.
//!
//! Dropping a handle is the cancellation signal. A stage whose downstream
//! send fails stops, dropping its own upstream receiver, and the disconnect
//! cascades back to the source. [`Stream::limit`] and the short-circuiting
//! terminals rely on this, so abandoning a pipeline built on an unbounded
//! source does not leave producer threads parked.
//!
//! ```rust
//! use sugars_stream::{collector::to_vec, Stream};
//!
//! let evens: Vec<u64> = Stream::of(0..)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .limit(3)
//!     .collect(&to_vec());
//! assert_eq!(evens, vec![0, 20, 40]);
//! ```

mod stage;
mod terminal;

#[cfg(feature = "async")]
mod bridge;

#[cfg(feature = "async")]
pub use bridge::AsyncStream;
pub use terminal::StreamIter;

use crate::config::StreamConfig;
use crate::model::{self, Model};
use crossbeam::channel::{Receiver, Sender};
use stage::FaultSlot;
use std::fmt;

/// A one-shot handle over a channel of elements.
///
/// Intermediate operations consume the handle and return a new one;
/// terminal operations consume it and drain the channel in the calling
/// thread. Once a channel has been drained it yields nothing more: a second
/// handle over the same channel never replays.
pub struct Stream<T> {
    receiver: Option<Receiver<T>>,
    faults: FaultSlot,
    config: StreamConfig,
}

// Sources

impl<T: Send + 'static> Stream<T> {
    /// Stream the elements of `items`, in order, from a producer thread.
    ///
    /// The iterator is advanced lazily as elements are pulled, so unbounded
    /// iterators are fine as long as something downstream stops pulling.
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::of_with_config(items, StreamConfig::default())
    }

    /// [`Stream::of`] with an explicit config for this and every later stage.
    pub fn of_with_config<I>(items: I, config: StreamConfig) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let items = items.into_iter();
        let faults = FaultSlot::default();
        let (tx, rx) = config.channel();
        stage::spawn("source", &config, &faults, tx, move |tx: &Sender<T>| {
            let mut sent = 0;
            for item in items {
                if tx.send(item).is_err() {
                    log::trace!("source: downstream dropped after {sent} elements");
                    break;
                }
                sent += 1;
            }
            sent
        });
        Self {
            receiver: Some(rx),
            faults,
            config,
        }
    }

    /// Wrap a channel owned by the caller.
    ///
    /// No thread is spawned. The caller keeps the sending side and is
    /// responsible for dropping it; until then consumers of this stream wait
    /// for more elements.
    pub fn from_receiver(receiver: Receiver<T>) -> Self {
        Self {
            receiver: Some(receiver),
            faults: FaultSlot::default(),
            config: StreamConfig::default(),
        }
    }

    /// A rendezvous channel whose receiving side is already a stream.
    pub fn channel() -> (Sender<T>, Self) {
        let (tx, rx) = crossbeam::channel::bounded(0);
        (tx, Self::from_receiver(rx))
    }

    /// A stream holding no channel. Every terminal operation sees it as
    /// empty without blocking.
    pub fn empty() -> Self {
        Self {
            receiver: None,
            faults: FaultSlot::default(),
            config: StreamConfig::default(),
        }
    }

    /// Use `config` for every stage spawned from this handle onwards.
    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.config = config;
        self
    }

    /// The config that later stages will inherit.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Spawn one stage reading this stream and return the stream it writes.
    ///
    /// `body` also gets the stage's own fault slot, for stages that cut the
    /// chain or inspect upstream faults.
    fn pipe<U, F>(self, op: &'static str, body: F) -> Stream<U>
    where
        U: Send + 'static,
        F: FnOnce(Receiver<T>, &Sender<U>, &FaultSlot) -> usize + Send + 'static,
    {
        let Stream {
            receiver,
            faults,
            config,
        } = self;

        let Some(upstream) = receiver else {
            return Stream {
                receiver: None,
                faults,
                config,
            };
        };

        let faults = faults.downstream();
        let stage_faults = faults.clone();
        let (tx, rx) = config.channel();
        stage::spawn(op, &config, &faults, tx, move |tx: &Sender<U>| {
            body(upstream, tx, &stage_faults)
        });
        Stream {
            receiver: Some(rx),
            faults,
            config,
        }
    }
}

// Intermediate operations

impl<T: Send + 'static> Stream<T> {
    /// Transform each element with `op`, preserving order.
    ///
    /// `op` runs once per element, sequentially, on the stage thread.
    pub fn map<U, F>(self, mut op: F) -> Stream<U>
    where
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.pipe("map", move |upstream, tx, _| {
            let mut sent = 0;
            for item in upstream {
                if tx.send(op(item)).is_err() {
                    log::trace!("map: downstream dropped");
                    break;
                }
                sent += 1;
            }
            sent
        })
    }

    /// Forward only the elements for which `pred` holds, preserving order.
    pub fn filter<P>(self, mut pred: P) -> Stream<T>
    where
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.pipe("filter", move |upstream, tx, _| {
            let mut sent = 0;
            for item in upstream {
                if !pred(&item) {
                    continue;
                }
                if tx.send(item).is_err() {
                    log::trace!("filter: downstream dropped");
                    break;
                }
                sent += 1;
            }
            sent
        })
    }

    /// Expand each element into zero or more elements.
    ///
    /// Expansions are flattened depth first: every element produced from one
    /// input is sent before the next input is read.
    pub fn flat_map<U, I, F>(self, mut multi_op: F) -> Stream<U>
    where
        U: Send + 'static,
        I: IntoIterator<Item = U>,
        F: FnMut(T) -> I + Send + 'static,
    {
        self.pipe("flat_map", move |upstream, tx, _| {
            let mut sent = 0;
            'upstream: for item in upstream {
                for expanded in multi_op(item) {
                    if tx.send(expanded).is_err() {
                        log::trace!("flat_map: downstream dropped");
                        break 'upstream;
                    }
                    sent += 1;
                }
            }
            sent
        })
    }

    /// Forward at most `max` elements.
    ///
    /// Once the quota is met the stage stops reading and drops its upstream
    /// receiver, which cancels the producers behind it. Element `max + 1` is
    /// never pulled by this stage. A stage upstream may already be working on
    /// it; a panic raised there after the quota is met is discarded, so the
    /// result does not depend on thread timing.
    pub fn limit(self, max: usize) -> Stream<T> {
        self.pipe("limit", move |upstream, tx, faults| {
            let mut sent = 0;
            if max == 0 {
                faults.cut_upstream();
                return sent;
            }
            for item in upstream {
                if tx.send(item).is_err() {
                    log::trace!("limit: downstream dropped");
                    break;
                }
                sent += 1;
                if sent == max {
                    log::trace!("limit: quota of {max} reached");
                    faults.cut_upstream();
                    break;
                }
            }
            sent
        })
    }

    /// Observe each element with `consumer`, forwarding them unchanged.
    ///
    /// This is an eager barrier: the stage drains its whole upstream, calling
    /// `consumer` on each element in arrival order, before it replays the
    /// buffered elements downstream. Nothing is replayed if a stage upstream
    /// panicked.
    pub fn peek<C>(self, mut consumer: C) -> Stream<T>
    where
        C: FnMut(&T) + Send + 'static,
    {
        self.pipe("peek", move |upstream, tx, faults| {
            let buffered: Vec<T> = upstream
                .into_iter()
                .inspect(|item| consumer(item))
                .collect();
            replay("peek", buffered, tx, faults)
        })
    }
}

impl<T: Model + Send + 'static> Stream<T> {
    /// Drop every element equal (by [`Model::equals`]) to an earlier one.
    ///
    /// This is an eager barrier: the stage drains its whole upstream before
    /// replaying the first-seen elements in order, or replays nothing if a
    /// stage upstream panicked. Membership is a linear
    /// scan over the accepted elements, since equality is the only capability
    /// assumed, so the cost is quadratic in the number of distinct elements.
    pub fn distinct(self) -> Stream<T> {
        self.pipe("distinct", move |upstream, tx, faults| {
            let mut accepted: Vec<T> = Vec::new();
            for item in upstream {
                if !model::contains(&accepted, &item) {
                    accepted.push(item);
                }
            }
            replay("distinct", accepted, tx, faults)
        })
    }
}

fn replay<T>(op: &'static str, buffered: Vec<T>, tx: &Sender<T>, faults: &FaultSlot) -> usize {
    let mut sent = 0;
    if faults.is_faulted() {
        log::debug!(
            "{op}: upstream faulted, dropping {} buffered elements",
            buffered.len()
        );
        return sent;
    }
    for item in buffered {
        if tx.send(item).is_err() {
            log::trace!("{op}: downstream dropped during replay");
            break;
        }
        sent += 1;
    }
    sent
}

impl<T> fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("element", &std::any::type_name::<T>())
            .field("has_channel", &self.receiver.is_some())
            .field("config", &self.config)
            .finish()
    }
}
