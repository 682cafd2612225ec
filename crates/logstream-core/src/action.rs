//! Stream actions
//!
//! Everything that reaches the consumer goes through one queue as a
//! [`StreamAction`]: record deliveries from producers, configuration changes
//! from the user, and layout feedback from the presentation.

use crate::filter::ComponentScope;
use crate::model::{Level, Record};

#[derive(Debug, Clone, PartialEq)]
pub enum StreamAction {
    // === Producer ===
    /// New records from an emitter
    Deliver(Vec<Record>),
    /// Bulk replacement of the buffer
    LoadInitial(Vec<Record>),

    // === Configuration ===
    SetMinLevel(Option<Level>),
    SetComponentScope(ComponentScope),
    SetFollowMode(bool),
    Clear,

    // === Presentation feedback ===
    /// The user scrolled, or a scroll instruction was applied. `generation`
    /// is that of the update the presentation was showing.
    ViewportScrolled { offset: f64, generation: u64 },
    /// The layout pass following the last update finished
    LayoutSettled,

    /// Stop draining; pending actions are discarded
    Close,
}

impl StreamAction {
    /// Check if this action mutates the record buffer
    pub fn is_delivery(&self) -> bool {
        matches!(self, StreamAction::Deliver(_) | StreamAction::LoadInitial(_))
    }

    /// Check if this action changes the user's view configuration
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            StreamAction::SetMinLevel(_)
                | StreamAction::SetComponentScope(_)
                | StreamAction::SetFollowMode(_)
                | StreamAction::Clear
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_delivery() {
        assert!(StreamAction::Deliver(Vec::new()).is_delivery());
        assert!(StreamAction::LoadInitial(Vec::new()).is_delivery());
        assert!(!StreamAction::Clear.is_delivery());
    }

    #[test]
    fn test_is_configuration() {
        assert!(StreamAction::SetFollowMode(true).is_configuration());
        assert!(StreamAction::SetMinLevel(None).is_configuration());
        assert!(!StreamAction::LayoutSettled.is_configuration());
        assert!(
            !StreamAction::ViewportScrolled {
                offset: 3.0,
                generation: 1
            }
            .is_configuration()
        );
    }
}
