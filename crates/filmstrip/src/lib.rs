#![forbid(unsafe_code)]

//! Filmstrip public facade crate.
//!
//! Re-exports the stable surface of the carousel library and offers a
//! lightweight prelude. A carousel is built from a [`PanelDeck`], driven by
//! a [`CarouselController`] inside a [`Program`] (or a [`Simulator`] in
//! tests), and rendered through [`Strip`] and [`IndicatorBar`].

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use filmstrip_core::event::CarouselEvent;
pub use filmstrip_core::geometry::{Axis, FixedMeasure, Measure, Size};
pub use filmstrip_core::panel::{
    CallToAction, DeckError, ImageRef, Panel, PanelDeck, PanelKey,
};
pub use filmstrip_core::state::{CarouselState, Phase};

// --- Runtime re-exports ----------------------------------------------------

pub use filmstrip_runtime::{
    CarouselConfig, CarouselController, Cmd, DEFAULT_AUTO_ADVANCE, Disconnected, Input, Model,
    Program, ProgramHandle, Simulator, TickScheduler, TimerStats,
};

// --- Widget re-exports -----------------------------------------------------

pub use filmstrip_widgets::{
    IndicatorBar, NavControl, PanelPlacement, Strip, TabStop, tab_stops,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for filmstrip apps.
#[derive(Debug)]
pub enum Error {
    /// The panel deck was invalid.
    Deck(DeckError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Deck(err) => Some(err),
        }
    }
}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Self::Deck(err)
    }
}

/// Standard result type for filmstrip APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, CarouselConfig, CarouselController, CarouselEvent, CarouselState, Cmd, Error,
        IndicatorBar, Model, NavControl, Panel, PanelDeck, PanelKey, Program, ProgramHandle,
        Result, Simulator, Size, Strip,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_error_converts() {
        let err: Error = DeckError::Empty.into();
        assert!(err.to_string().contains("at least one panel"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn facade_wires_the_whole_stack() {
        let deck = PanelDeck::new(vec![
            Panel::new("a", "b", ImageRef::new("img://a"), PanelKey::new("a")),
            Panel::new("c", "d", ImageRef::new("img://c"), PanelKey::new("c")),
        ])
        .unwrap();

        let mut sim = Simulator::new(CarouselController::new(deck));
        sim.init();
        sim.event(CarouselEvent::Measured(Size::new(300, 200)));
        sim.event(CarouselEvent::Next);

        let model = sim.model();
        let placements = Strip::new(model.deck(), model.state())
            .viewport(model.viewport())
            .placements();
        assert_eq!(placements[1].horizontal, 0);
        assert_eq!(placements[0].horizontal, -300);
        assert!(placements[1].active);
    }
}
