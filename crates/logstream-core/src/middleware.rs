//! Middleware run on the consumer before an action reaches the controller

use crate::action::StreamAction;
use crate::controller::LogStreamController;

/// Middleware trait - intercepts actions before they reach the controller
///
/// Middleware runs on the consumer thread, in registration order.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `controller`: Current controller state (read-only)
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &StreamAction, controller: &LogStreamController) -> bool;
}

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &StreamAction, controller: &LogStreamController) -> bool {
        match action {
            // Record payloads would flood the log; counts are enough
            StreamAction::Deliver(batch) => log::trace!(
                "Action: Deliver({} records, buffer at {})",
                batch.len(),
                controller.ring().len()
            ),
            StreamAction::LoadInitial(batch) => {
                log::debug!("Action: LoadInitial({} records)", batch.len())
            }
            // Emitted once per frame by the presentation
            StreamAction::LayoutSettled | StreamAction::ViewportScrolled { .. } => {
                log::trace!("Action: {:?}", action)
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}
