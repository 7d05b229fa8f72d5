//! Async consumption of a pipeline through `async-channel`.

use super::stage::{self, FaultSlot};
use super::Stream;
use futures::Stream as FuturesStream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A [`Stream`] exposed as a `futures::Stream`.
///
/// A bridge thread pulls from the pipeline and hands elements to the async
/// side one at a time, so back-pressure still reaches the source. Dropping
/// the `AsyncStream` cancels the pipeline.
pub struct AsyncStream<T> {
    receiver: Pin<Box<async_channel::Receiver<T>>>,
    faults: FaultSlot,
}

impl<T: Send + 'static> Stream<T> {
    /// Consume this stream from async code.
    ///
    /// ```rust
    /// use futures::StreamExt;
    /// use sugars_stream::Stream;
    ///
    /// let doubled: Vec<i32> = futures::executor::block_on(
    ///     Stream::of(vec![1, 2, 3]).map(|n| n * 2).into_async().collect(),
    /// );
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn into_async(self) -> AsyncStream<T> {
        let faults = self.faults.downstream();
        let config = self.config.clone();
        let (tx, rx) = async_channel::bounded(1);

        let upstream = self.into_iter();
        let forward = move |tx: &async_channel::Sender<T>| {
            let mut sent = 0;
            for item in upstream {
                if tx.send_blocking(item).is_err() {
                    log::trace!("bridge: async consumer dropped");
                    break;
                }
                sent += 1;
            }
            sent
        };
        stage::spawn("bridge", &config, &faults, tx, forward);

        AsyncStream {
            receiver: Box::pin(rx),
            faults,
        }
    }
}

impl<T> FuturesStream for AsyncStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        match self.receiver.as_mut().poll_next(cx) {
            Poll::Ready(None) => {
                self.faults.rethrow();
                Poll::Ready(None)
            }
            other => other,
        }
    }
}
