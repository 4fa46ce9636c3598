#![forbid(unsafe_code)]

//! Core data model and state machine for the filmstrip carousel.
//!
//! This crate is pure: no timers, no threads, no IO. It owns the panel
//! content model, the measurement primitives, the cyclic index state
//! machine, and the offset derivation that positions panels relative to
//! the active one. The runtime crate drives these types from events.

pub mod event;
pub mod geometry;
pub mod panel;
pub mod state;

pub use event::CarouselEvent;
pub use geometry::{Axis, FixedMeasure, Measure, Size};
pub use panel::{CallToAction, DeckError, ImageRef, Panel, PanelDeck, PanelKey};
pub use state::{CarouselState, Phase};
