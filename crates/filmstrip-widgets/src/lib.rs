#![forbid(unsafe_code)]

//! View-model widgets for the filmstrip carousel.
//!
//! Nothing here paints pixels. Each widget borrows the core state and
//! derives what a rendering layer needs: panel placements for the strip,
//! a dot row for the indicators, events and focus order for the controls.
//! Everything is recomputed fresh on each call; no layout state persists
//! between renders.

pub mod controls;
pub mod indicator;
pub mod strip;

pub use controls::{NavControl, TabStop, tab_stops};
pub use indicator::IndicatorBar;
pub use strip::{PanelPlacement, Strip};
