//! # logstream-core
//!
//! A bounded, continuously appended log buffer with a live filtered view that
//! keeps the reader's scroll position stable while records arrive and old ones
//! are evicted.
//!
//! ## Design Principles
//!
//! The crate knows nothing about rendering. It receives records and
//! configuration changes as [`StreamAction`]s and emits [`ViewEvent`]s that a
//! presentation layer applies. Scroll geometry stays on the presentation side;
//! the core only ever emits an abstract [`ScrollInstruction`].
//!
//! ## Single consumer
//!
//! All state lives in one [`LogStreamController`], owned by a single consumer
//! thread. Producers on any thread enqueue batches through a cloneable
//! [`LogProducer`]; the consumer applies them one at a time in arrival order.
//!
//! ## Usage
//!
//! ```rust
//! use logstream_core::{ControllerOptions, Level, LogStreamController, Record, StreamSession};
//!
//! let controller = LogStreamController::new(ControllerOptions::default());
//! let session = StreamSession::open(controller);
//!
//! let producer = session.producer();
//! producer.deliver(Record::new(Level::Info, "worker", "started"));
//!
//! let event = session.events().recv().unwrap();
//! # let _ = event;
//! session.close();
//! ```

pub mod action;
pub mod controller;
pub mod dispatcher;
pub mod event;
pub mod filter;
pub mod middleware;
pub mod model;
pub mod ring_log;
pub mod session;
pub mod viewport;
mod worker;

// Re-export commonly used types
pub use action::StreamAction;
pub use controller::{ControllerOptions, LogStreamController};
pub use dispatcher::{Dispatcher, LogProducer, ViewControl};
pub use event::{ViewEvent, ViewUpdate, status_text};
pub use filter::{
    ComponentScope, FilterConfig, ReservedComponents, ScopeName, level_rank, matches, recompute,
};
pub use middleware::{LoggingMiddleware, Middleware};
pub use model::{Level, Record};
pub use ring_log::{DEFAULT_CAPACITY, EvictionReport, RingLog};
pub use session::StreamSession;
pub use viewport::{
    DEFAULT_ROW_HEIGHT, Mutation, ScrollInstruction, ViewportMode, ViewportState, ViewportTracker,
};
