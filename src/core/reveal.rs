//! Trigger-once reveal state for scroll-animated sections.

/// Minimum visible fraction of a section before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Per-section reveal state machine: `NotTriggered -> Triggered`, never back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotTriggered,
    Triggered,
}

impl RevealState {
    /// Feed one intersection observation.
    ///
    /// Returns `true` only for the observation that performs the transition;
    /// every later call is a no-op returning `false`.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        match self {
            RevealState::NotTriggered if intersection_ratio >= REVEAL_THRESHOLD => {
                *self = RevealState::Triggered;
                true
            }
            _ => false,
        }
    }

    /// Reveal without an observation, used when the viewport can't be observed.
    pub fn force(&mut self) -> bool {
        self.observe(1.0)
    }

    /// Reveal because no observer could be attached, logging `reason` to the
    /// browser console (or stderr on the server).
    pub fn reveal_unobserved(&mut self, reason: &str) -> bool {
        leptos::logging::warn!("IntersectionObserver unavailable ({reason}), revealing section");
        self.force()
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Triggered)
    }

    pub fn class(&self) -> &'static str {
        match self {
            RevealState::NotTriggered => "reveal",
            RevealState::Triggered => "reveal reveal-visible",
        }
    }
}
