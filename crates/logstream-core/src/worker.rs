//! Consumer thread that owns the controller
//!
//! - Producers and the presentation enqueue [`StreamAction`]s from any thread
//! - This thread drains the queue and applies actions one at a time, in order
//! - Results go back to the presentation as [`ViewEvent`]s
//!
//! The scroll that follows a mutation is held back until the presentation
//! sends [`StreamAction::LayoutSettled`] after its next render pass.

use crate::action::StreamAction;
use crate::controller::LogStreamController;
use crate::event::ViewEvent;
use crate::middleware::Middleware;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Spawn the consumer thread
///
/// - `action_rx`: the single queue every producer and the presentation feed
/// - `event_tx`: view events for the presentation layer
/// - `controller`: moved into the thread; nothing else can reach it
/// - `middleware`: runs before the controller sees an action
pub fn spawn_consumer(
    action_rx: Receiver<StreamAction>,
    event_tx: Sender<ViewEvent>,
    controller: LogStreamController,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        consumer_loop(action_rx, event_tx, controller, middleware);
    })
}

fn consumer_loop(
    action_rx: Receiver<StreamAction>,
    event_tx: Sender<ViewEvent>,
    mut controller: LogStreamController,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Log stream consumer started");

    while let Ok(action) = action_rx.recv() {
        if matches!(action, StreamAction::Close) {
            log::info!("Log stream consumer received close, discarding pending actions");
            let _ = event_tx.send(ViewEvent::Closed);
            break;
        }

        let mut should_apply = true;
        for mw in &mut middleware {
            if !mw.handle(&action, &controller) {
                should_apply = false;
                break;
            }
        }
        if !should_apply {
            continue;
        }

        let events = apply(&mut controller, action);
        if events.into_iter().any(|event| event_tx.send(event).is_err()) {
            log::info!("View event channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Log stream consumer stopped");
}

/// Apply one action to the controller and collect the resulting events
pub(crate) fn apply(controller: &mut LogStreamController, action: StreamAction) -> Vec<ViewEvent> {
    match action {
        StreamAction::Deliver(batch) => controller
            .ingest(batch)
            .map(ViewEvent::Updated)
            .into_iter()
            .collect(),
        StreamAction::LoadInitial(batch) => {
            vec![ViewEvent::Updated(controller.load_initial(batch))]
        }
        StreamAction::SetMinLevel(level) => {
            vec![ViewEvent::Updated(controller.set_min_level(level))]
        }
        StreamAction::SetComponentScope(scope) => {
            vec![ViewEvent::Updated(controller.set_component_scope(scope))]
        }
        StreamAction::SetFollowMode(follow) => {
            let instruction = controller.set_follow_mode(follow);
            let mut events = vec![ViewEvent::FollowModeChanged(controller.is_following())];
            if !instruction.is_none() {
                events.push(ViewEvent::Scroll(instruction));
            }
            events
        }
        StreamAction::Clear => vec![ViewEvent::Updated(controller.clear())],
        StreamAction::ViewportScrolled { offset, generation } => {
            controller.viewport_scrolled_at(offset, generation);
            Vec::new()
        }
        StreamAction::LayoutSettled => controller
            .layout_settled()
            .map(ViewEvent::Scroll)
            .into_iter()
            .collect(),
        StreamAction::Close => Vec::new(),
    }
}
