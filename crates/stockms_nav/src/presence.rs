//! Mount/unmount sequencing for elements with enter and exit transitions.

/// Lifecycle of an element that animates in and out.
///
/// `Entering` is mounted at its initial pose for one frame so the browser
/// has something to transition from. `Exiting` stays mounted until the exit
/// transition has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresencePhase {
    #[default]
    Hidden,
    Entering,
    Shown,
    Exiting,
}

impl PresencePhase {
    pub fn on_visibility(self, visible: bool) -> Self {
        match (self, visible) {
            (PresencePhase::Hidden | PresencePhase::Exiting, true) => PresencePhase::Entering,
            (PresencePhase::Entering | PresencePhase::Shown, false) => PresencePhase::Exiting,
            (phase, _) => phase,
        }
    }

    /// Called once the pending frame or exit timer has elapsed.
    pub fn advance(self) -> Self {
        match self {
            PresencePhase::Entering => PresencePhase::Shown,
            PresencePhase::Exiting => PresencePhase::Hidden,
            phase => phase,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != PresencePhase::Hidden
    }
}
