#![forbid(unsafe_code)]

//! Input vocabulary for a mounted carousel.

use crate::geometry::{Measure, Size};

/// The complete set of stimuli a carousel receives while mounted.
///
/// Every variant is delivered on the single dispatch context; handlers run
/// to completion before the next event is taken, so state reads after a
/// dispatch always observe a fully-updated index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The auto-advance timer fired.
    Tick,
    /// The manual "previous" control was pressed.
    Prev,
    /// The manual "next" control was pressed.
    Next,
    /// An indicator for the given panel position was pressed.
    Select(usize),
    /// The rendering surface reported a (possibly zero) pixel size.
    Measured(Size),
    /// The carousel is being torn down.
    Quit,
}

impl CarouselEvent {
    /// Build a measurement event from a [`Measure`] collaborator.
    ///
    /// An unavailable measurement becomes a zero size, which downstream
    /// treats as "not yet laid out" rather than as a failure.
    pub fn from_measure(surface: &impl Measure) -> Self {
        Self::Measured(surface.measure().unwrap_or_default())
    }
}
