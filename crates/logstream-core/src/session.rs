//! View session
//!
//! Wires a controller to its consumer thread and hands out the handles the
//! outside world talks to it through.

use crate::action::StreamAction;
use crate::controller::LogStreamController;
use crate::dispatcher::{Dispatcher, LogProducer, ViewControl};
use crate::event::ViewEvent;
use crate::middleware::{LoggingMiddleware, Middleware};
use crate::worker::spawn_consumer;
use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

/// A running view session: one consumer thread owning one controller.
pub struct StreamSession {
    dispatcher: Dispatcher,
    events: Receiver<ViewEvent>,
    handle: Option<JoinHandle<()>>,
}

impl StreamSession {
    /// Start a session with the default middleware chain
    pub fn open(controller: LogStreamController) -> Self {
        Self::with_middleware(controller, vec![Box::new(LoggingMiddleware::new())])
    }

    pub fn with_middleware(
        controller: LogStreamController,
        middleware: Vec<Box<dyn Middleware>>,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let handle = spawn_consumer(action_rx, event_tx, controller, middleware);

        Self {
            dispatcher: Dispatcher::new(action_tx),
            events: event_rx,
            handle: Some(handle),
        }
    }

    /// Handle for an emitter; clone freely across threads
    pub fn producer(&self) -> LogProducer {
        LogProducer::new(self.dispatcher.clone())
    }

    /// Handle for the presentation layer
    pub fn control(&self) -> ViewControl {
        ViewControl::new(self.dispatcher.clone())
    }

    /// View events, in the order the consumer produced them
    pub fn events(&self) -> &Receiver<ViewEvent> {
        &self.events
    }

    /// Stop draining and wait for the consumer to finish.
    ///
    /// Actions still queued behind the close are discarded.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.dispatcher.dispatch(StreamAction::Close);
            if handle.join().is_err() {
                log::error!("Log stream consumer panicked");
            }
        }
    }
}

impl Drop for StreamSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
