//! Stage runner: one named thread per stage.
//!
//! A stage owns the sending half of the channel it creates and drops it when
//! its loop ends, which is how its consumer observes end-of-stream. It never
//! closes anything it only receives from; dropping its upstream receiver is a
//! cancellation signal to the producer, not a close.

use crate::config::StreamConfig;
use parking_lot::Mutex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

type Payload = Box<dyn Any + Send + 'static>;

#[derive(Default)]
struct Faults {
    recorded: Vec<(usize, Payload)>,
    // Stages upstream of this position were cut off by a met quota.
    cut: usize,
}

impl Faults {
    fn live(&self) -> Option<usize> {
        self.recorded.iter().position(|(at, _)| *at >= self.cut)
    }
}

/// Panics raised by the stages of one pipeline, shared along the chain.
///
/// Each handle carries the position of the stage writing its channel: the
/// source is 0 and every spawned stage is one further downstream. A stage
/// that stops on its own quota cuts the chain at its position. Faults raised
/// upstream of the cut are discarded.
#[derive(Clone, Default)]
pub(crate) struct FaultSlot {
    shared: Arc<Mutex<Faults>>,
    position: usize,
}

impl FaultSlot {
    /// The slot for a stage spawned downstream of this one.
    pub(crate) fn downstream(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            position: self.position + 1,
        }
    }

    fn record(&self, payload: Payload) {
        self.shared.lock().recorded.push((self.position, payload));
    }

    /// Abandon everything upstream of this stage.
    ///
    /// Must be called before the stage drops its sender, so a consumer that
    /// observes the disconnect also observes the cut.
    pub(crate) fn cut_upstream(&self) {
        let mut faults = self.shared.lock();
        faults.cut = faults.cut.max(self.position);
    }

    /// Whether a fault that survives the cut has been recorded.
    pub(crate) fn is_faulted(&self) -> bool {
        self.shared.lock().live().is_some()
    }

    /// Re-raise the earliest surviving stage panic in the calling thread.
    pub(crate) fn rethrow(&self) {
        let payload = {
            let mut faults = self.shared.lock();
            let cut = faults.cut;
            let discarded = faults.recorded.iter().filter(|(at, _)| *at < cut).count();
            if discarded > 0 {
                log::debug!("discarding {discarded} faults raised past a met quota");
            }
            faults.live().map(|index| faults.recorded.remove(index).1)
        };
        if let Some(payload) = payload {
            panic::resume_unwind(payload);
        }
    }
}

/// Spawn a stage thread running `body` against `sender`.
///
/// `body` returns how many elements it forwarded. A panic inside `body` is
/// recorded in `faults`, at the slot's position, before `sender` is dropped,
/// so any consumer that sees the disconnect also sees the fault.
///
/// # Panics
///
/// Panics if the OS refuses to spawn the thread, like `std::thread::spawn`.
pub(crate) fn spawn<S, F>(
    op: &'static str,
    config: &StreamConfig,
    faults: &FaultSlot,
    sender: S,
    body: F,
) where
    S: Send + 'static,
    F: FnOnce(&S) -> usize + Send + 'static,
{
    let faults = faults.clone();
    let name = format!("{}-{}", config.thread_name(), op);
    let mut builder = thread::Builder::new().name(name);
    if let Some(size) = config.stack_size() {
        builder = builder.stack_size(size);
    }

    let spawned = builder.spawn(move || {
        log::debug!("{op} stage started");
        match panic::catch_unwind(AssertUnwindSafe(|| body(&sender))) {
            Ok(forwarded) => log::debug!("{op} stage finished, forwarded {forwarded} elements"),
            Err(payload) => {
                log::error!("{op} stage panicked: {}", describe(payload.as_ref()));
                faults.record(payload);
            }
        }
        drop(sender);
    });

    if let Err(err) = spawned {
        panic!("failed to spawn {op} stage thread: {err}");
    }
}

fn describe(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
