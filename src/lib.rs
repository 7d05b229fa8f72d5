//! # Sugars Stream
//!
//! Lazily-evaluated stream pipelines with one thread per stage and composable
//! collectors.
//!
//! A pipeline is built from a source, a chain of intermediate stages and one
//! terminal operation:
//!
//! - Sources: [`Stream::of`] (any iterator, including unbounded ones),
//!   [`Stream::from_receiver`] (a caller-owned channel), [`Stream::empty`]
//! - Stages: `map`, `filter`, `flat_map`, `limit`, `distinct`, `peek`
//! - Terminals: `any_match`, `all_match`, `none_match`, `find_first`, `count`,
//!   `for_each`, `collect`
//!
//! Building a chain evaluates nothing. Stages hand elements over rendezvous
//! channels, so production starts only when the terminal operation pulls.
//!
//! ## Features
//!
//! - `async` (default) - consume a pipeline as a `futures::Stream`
//! - `serde` - `Serialize`/`Deserialize` for [`Optional`]
//!
//! ## Example
//!
//! ```rust
//! use sugars_stream::collector::{grouping_by, to_vec};
//! use sugars_stream::{model_eq, Stream};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Employee {
//!     name: &'static str,
//!     title: &'static str,
//!     salary: f32,
//! }
//!
//! model_eq!(Employee);
//!
//! let staff = vec![
//!     Employee { name: "Alex", title: "Developer", salary: 72000.0 },
//!     Employee { name: "Rebecca", title: "Manager", salary: 84000.0 },
//!     Employee { name: "Joshua", title: "Developer", salary: 65000.0 },
//! ];
//!
//! let by_title = Stream::of(staff)
//!     .map(|mut e| {
//!         if e.title == "Developer" {
//!             e.salary *= 1.5;
//!         }
//!         e
//!     })
//!     .filter(|e| e.salary <= 100000.0)
//!     .collect(&grouping_by(|e: &Employee| e.title, to_vec()));
//!
//! assert_eq!(by_title["Developer"].len(), 1);
//! assert_eq!(by_title["Manager"][0].name, "Rebecca");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod collector;
pub mod config;
pub mod error;
pub mod function;
pub mod model;
pub mod optional;
pub mod stream;

pub use collector::Collector;
pub use config::{StreamConfig, StreamConfigBuilder};
pub use error::{Result, StreamError};
pub use function::Predicate;
pub use model::{models_equal, Model};
pub use optional::Optional;
pub use stream::{Stream, StreamIter};

#[cfg(feature = "async")]
pub use stream::AsyncStream;
