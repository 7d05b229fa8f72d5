//! Stage configuration shared along a pipeline.
//!
//! Every stage spawned from a [`Stream`](crate::Stream) inherits the config of
//! the handle it was built from. The default is a rendezvous hand-off: a send
//! blocks until the downstream stage is ready to receive.

use crate::error::{Result, StreamError};
use crossbeam::channel::{self, Receiver, Sender};

/// Default prefix for stage thread names.
pub const DEFAULT_THREAD_NAME: &str = "sugars-stream";

/// Settings applied to every stage of a pipeline.
///
/// ```rust
/// use sugars_stream::StreamConfig;
///
/// let config = StreamConfig::builder()
///     .capacity(16)
///     .thread_name("ingest")
///     .build()
///     .unwrap();
/// assert_eq!(config.capacity(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    capacity: usize,
    thread_name: String,
    stack_size: Option<usize>,
}

impl StreamConfig {
    /// Start building a config from the defaults.
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::default()
    }

    /// Channel capacity between stages. `0` means rendezvous.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prefix used for stage thread names.
    #[inline]
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Stack size of stage threads, if overridden.
    #[inline]
    pub fn stack_size(&self) -> Option<usize> {
        self.stack_size
    }

    /// Whether stages hand elements off synchronously.
    #[inline]
    pub fn is_rendezvous(&self) -> bool {
        self.capacity == 0
    }

    pub(crate) fn channel<T>(&self) -> (Sender<T>, Receiver<T>) {
        channel::bounded(self.capacity)
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            capacity: 0,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
            stack_size: None,
        }
    }
}

/// Builder for [`StreamConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct StreamConfigBuilder {
    config: StreamConfig,
}

impl StreamConfigBuilder {
    /// Buffer up to `capacity` elements between stages.
    ///
    /// Any non-zero value loosens back-pressure: a stage may run ahead of its
    /// consumer by that many elements.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Prefix for stage thread names.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.thread_name = name.into();
        self
    }

    /// Stack size for stage threads.
    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.config.stack_size = Some(bytes);
        self
    }

    /// Validate and produce the config.
    pub fn build(self) -> Result<StreamConfig> {
        let config = self.config;
        if config.thread_name.is_empty() {
            return Err(StreamError::invalid_config("thread name must not be empty"));
        }
        if config.thread_name.contains('\0') {
            return Err(StreamError::invalid_config(
                "thread name must not contain NUL bytes",
            ));
        }
        if config.stack_size == Some(0) {
            return Err(StreamError::invalid_config("stack size must be non-zero"));
        }
        Ok(config)
    }
}
