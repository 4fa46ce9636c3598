#![forbid(unsafe_code)]

//! Cyclic index state machine for the carousel.
//!
//! The machine has two phases: `Uninitialized` before the rendering surface
//! has been measured, and `Ready(index)` afterwards. All transitions are
//! total functions over bounded integers; every mutator reports whether the
//! index actually changed so a single call site can own timer restarts.

use crate::geometry::{Axis, Size};

/// Lifecycle phase of the carousel index.
///
/// Offsets are meaningless before first layout, so the pre-measurement
/// phase is an explicit variant rather than a sentinel index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The surface has not produced a usable measurement yet.
    Uninitialized,
    /// Normal operation; `index` is always in `[0, panel_count)`.
    Ready {
        /// The active panel index.
        index: usize,
    },
}

/// Single-owner carousel state: a panel count fixed at construction and the
/// current phase. One instance per mounted carousel; no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    panel_count: usize,
    phase: Phase,
}

impl CarouselState {
    /// Create an uninitialized state over `panel_count` panels.
    ///
    /// A count of zero is accepted but the state can never leave
    /// `Uninitialized`; the deck type rejects empty sequences upstream.
    pub fn new(panel_count: usize) -> Self {
        Self {
            panel_count,
            phase: Phase::Uninitialized,
        }
    }

    /// Number of panels in the cycle.
    pub fn len(&self) -> usize {
        self.panel_count
    }

    /// Whether the cycle is empty (a deck never is; see [`new`](Self::new)).
    pub fn is_empty(&self) -> bool {
        self.panel_count == 0
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active panel index, once initialized.
    pub fn current(&self) -> Option<usize> {
        match self.phase {
            Phase::Uninitialized => None,
            Phase::Ready { index } => Some(index),
        }
    }

    /// Whether the state has left `Uninitialized`.
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    /// Whether `panel` is the active panel.
    pub fn is_active(&self, panel: usize) -> bool {
        self.current() == Some(panel)
    }

    /// Transition `Uninitialized -> Ready(0)`.
    ///
    /// Fires at most once; a no-op when already ready or when there are no
    /// panels to cycle over. Returns whether the index came into existence.
    pub fn initialize(&mut self) -> bool {
        match self.phase {
            Phase::Uninitialized if self.panel_count > 0 => {
                self.phase = Phase::Ready { index: 0 };
                true
            }
            _ => false,
        }
    }

    /// Step to the next panel, wrapping at the end of the cycle.
    ///
    /// Returns whether the index changed (it does not for a single-panel
    /// cycle, or before initialization).
    pub fn advance(&mut self) -> bool {
        self.set_index(|index, n| (index + 1) % n)
    }

    /// Step to the previous panel, wrapping at the start of the cycle.
    pub fn retreat(&mut self) -> bool {
        self.set_index(|index, n| (index + n - 1) % n)
    }

    /// Jump directly to `target`.
    ///
    /// Targets come from rendering the fixed indicator list, so an
    /// out-of-range value is an implementer bug, not a runtime condition.
    pub fn jump_to(&mut self, target: usize) -> bool {
        debug_assert!(
            target < self.panel_count,
            "jump_to target {target} out of range for {} panels",
            self.panel_count
        );
        self.set_index(|_, _| target)
    }

    /// Pixel displacement of `panel` from the active position along `axis`.
    ///
    /// The active panel sits at offset 0; neighbors sit at successive
    /// multiples of the surface extent. An unmeasured surface (or one with a
    /// zero extent along `axis`) collapses every panel onto offset 0, as
    /// does the uninitialized phase. Both are acceptable transients before
    /// first layout, never errors.
    pub fn offset(&self, panel: usize, axis: Axis, viewport: Option<Size>) -> i64 {
        let Phase::Ready { index } = self.phase else {
            return 0;
        };
        let extent = viewport.map_or(0, |size| size.extent(axis));
        (panel as i64 - index as i64) * i64::from(extent)
    }

    /// Shared mutation path for all index transitions.
    fn set_index(&mut self, f: impl FnOnce(usize, usize) -> usize) -> bool {
        let Phase::Ready { index } = self.phase else {
            return false;
        };
        let next = f(index, self.panel_count);
        debug_assert!(next < self.panel_count);
        if next == index {
            return false;
        }
        self.phase = Phase::Ready { index: next };
        true
    }
}
