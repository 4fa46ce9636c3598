#![forbid(unsafe_code)]

//! The carousel controller: one model owning the index and the timer policy.
//!
//! Every call site that mutates the index — the auto-advance tick, the nav
//! controls, the indicator clicks, the first measurement — flows through
//! [`CarouselController::update`], which restarts the auto-advance clock on
//! any change and leaves it alone otherwise. Keeping timer management in
//! this single entry point is what rules out divergent timer/state handling
//! across call sites.

use std::time::Duration;

use filmstrip_core::event::CarouselEvent;
use filmstrip_core::geometry::{Axis, Size};
use filmstrip_core::panel::PanelDeck;
use filmstrip_core::state::CarouselState;

use crate::program::{Cmd, Model};

/// Default auto-advance interval, taken from the marketing-site deployment
/// this library was extracted for.
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(50);

/// Tunable carousel behavior.
///
/// The interval is configuration, not algorithm: deployments pick their own
/// pacing without touching the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    /// Delay between automatic advances; also the delay re-armed after any
    /// manual navigation.
    pub auto_advance: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance: DEFAULT_AUTO_ADVANCE,
        }
    }
}

/// Owns the index state machine, the measured viewport, and the timer
/// policy for one mounted carousel.
pub struct CarouselController {
    deck: PanelDeck,
    state: CarouselState,
    viewport: Option<Size>,
    config: CarouselConfig,
}

impl CarouselController {
    /// Create a controller over a deck, with default configuration.
    ///
    /// The state starts uninitialized; the index comes into existence when
    /// the first measurable viewport size arrives.
    pub fn new(deck: PanelDeck) -> Self {
        Self::with_config(deck, CarouselConfig::default())
    }

    /// Create a controller with explicit configuration.
    pub fn with_config(deck: PanelDeck, config: CarouselConfig) -> Self {
        let state = CarouselState::new(deck.len());
        Self {
            deck,
            state,
            viewport: None,
            config,
        }
    }

    /// The panel deck.
    pub fn deck(&self) -> &PanelDeck {
        &self.deck
    }

    /// The index state machine.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// The most recent viewport measurement, if any.
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// The active configuration.
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// The active panel index, once initialized.
    pub fn current_index(&self) -> Option<usize> {
        self.state.current()
    }

    /// Displacement of `panel` from the active position along `axis`,
    /// against the live viewport measurement.
    pub fn offset(&self, panel: usize, axis: Axis) -> i64 {
        self.state.offset(panel, axis, self.viewport)
    }

    fn apply(&mut self, event: CarouselEvent) -> bool {
        match event {
            CarouselEvent::Measured(size) => {
                self.viewport = Some(size);
                if size.is_measurable() {
                    self.state.initialize()
                } else {
                    false
                }
            }
            CarouselEvent::Tick | CarouselEvent::Next => self.state.advance(),
            CarouselEvent::Prev => self.state.retreat(),
            CarouselEvent::Select(target) => self.state.jump_to(target),
            CarouselEvent::Quit => false,
        }
    }
}

impl Model for CarouselController {
    type Message = CarouselEvent;

    fn update(&mut self, event: CarouselEvent) -> Cmd<CarouselEvent> {
        if matches!(event, CarouselEvent::Quit) {
            tracing::debug!("carousel tearing down");
            return Cmd::quit();
        }

        let changed = self.apply(event);
        if changed {
            tracing::debug!(
                index = ?self.state.current(),
                event = ?event,
                "carousel index changed"
            );
            Cmd::tick(self.config.auto_advance)
        } else {
            Cmd::none()
        }
    }
}
