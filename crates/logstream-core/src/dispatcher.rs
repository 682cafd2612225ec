//! Dispatcher for the single-consumer queue
//!
//! Producers and the presentation never touch the controller directly. They
//! send [`StreamAction`]s through a [`Dispatcher`], which feeds the channel the
//! consumer drains. Sending never blocks.
//!
//! Two narrower handles wrap it:
//! - [`LogProducer`] for emitters (push-only record delivery)
//! - [`ViewControl`] for the presentation (configuration and layout feedback)

use crate::action::StreamAction;
use crate::filter::ComponentScope;
use crate::model::{Level, Record};
use std::sync::mpsc::Sender;

/// Sends actions into the consumer's queue
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<StreamAction>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<StreamAction>) -> Self {
        Self { action_tx }
    }

    /// Enqueue an action.
    ///
    /// Returns `false` when the session has closed; the action is dropped.
    pub fn dispatch(&self, action: StreamAction) -> bool {
        match self.action_tx.send(action) {
            Ok(()) => true,
            Err(_) => {
                log::debug!("Dispatcher: session closed, dropping action");
                false
            }
        }
    }
}

/// Push-only handle for log emitters.
///
/// Cheap to clone; hand one to every emitter thread. There is no backpressure:
/// the ring log absorbs bursts by eviction.
#[derive(Debug, Clone)]
pub struct LogProducer {
    dispatcher: Dispatcher,
}

impl LogProducer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn deliver(&self, record: Record) -> bool {
        self.deliver_batch(vec![record])
    }

    /// Deliver several records as one batch. Empty batches are not sent.
    pub fn deliver_batch(&self, records: Vec<Record>) -> bool {
        if records.is_empty() {
            return true;
        }
        self.dispatcher.dispatch(StreamAction::Deliver(records))
    }

    /// Replace the whole buffer, e.g. with the tail of a file on startup
    pub fn load_initial(&self, records: Vec<Record>) -> bool {
        self.dispatcher.dispatch(StreamAction::LoadInitial(records))
    }
}

/// Configuration and feedback handle for the presentation layer.
#[derive(Debug, Clone)]
pub struct ViewControl {
    dispatcher: Dispatcher,
}

impl ViewControl {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Forward an action built elsewhere, e.g. by the presentation's reducer
    pub fn dispatch(&self, action: StreamAction) -> bool {
        self.dispatcher.dispatch(action)
    }

    pub fn set_min_level(&self, level: Option<Level>) {
        self.dispatcher.dispatch(StreamAction::SetMinLevel(level));
    }

    pub fn set_component_scope(&self, scope: ComponentScope) {
        self.dispatcher
            .dispatch(StreamAction::SetComponentScope(scope));
    }

    pub fn set_follow_mode(&self, follow: bool) {
        self.dispatcher.dispatch(StreamAction::SetFollowMode(follow));
    }

    pub fn clear(&self) {
        self.dispatcher.dispatch(StreamAction::Clear);
    }

    /// Report the scroll position, measured against update `generation`
    pub fn viewport_scrolled(&self, offset: f64, generation: u64) {
        self.dispatcher.dispatch(StreamAction::ViewportScrolled {
            offset,
            generation,
        });
    }

    pub fn layout_settled(&self) {
        self.dispatcher.dispatch(StreamAction::LayoutSettled);
    }

    pub fn close(&self) {
        self.dispatcher.dispatch(StreamAction::Close);
    }
}
