#![forbid(unsafe_code)]

//! Strip widget: positions every panel relative to the active one.

use filmstrip_core::geometry::{Axis, Size};
use filmstrip_core::panel::{Panel, PanelDeck, PanelKey};
use filmstrip_core::state::CarouselState;

/// Computed position and focus data for one panel.
///
/// The active panel sits at offset `(0, 0)`; the others sit at successive
/// multiples of the surface extent, so the whole strip can be brought into
/// view with a single translate per axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelPlacement {
    /// Position of the panel in the deck.
    pub index: usize,
    /// Stable key of the panel, for keyed rendering.
    pub key: PanelKey,
    /// Pixel displacement along the horizontal axis.
    pub horizontal: i64,
    /// Pixel displacement along the vertical axis.
    pub vertical: i64,
    /// Whether this is the panel at the current index. Governs stacking
    /// and whether the panel's call-to-action is keyboard-focusable.
    pub active: bool,
}

/// Borrowing view over a deck and its state that derives panel placements.
#[derive(Debug, Clone)]
pub struct Strip<'a> {
    deck: &'a PanelDeck,
    state: &'a CarouselState,
    viewport: Option<Size>,
}

impl<'a> Strip<'a> {
    /// Create a strip over the given deck and state, with no measurement.
    pub fn new(deck: &'a PanelDeck, state: &'a CarouselState) -> Self {
        Self {
            deck,
            state,
            viewport: None,
        }
    }

    /// Set the live viewport measurement.
    ///
    /// An unmeasured surface collapses all placements onto `(0, 0)`, which
    /// is the accepted transient before first layout.
    #[must_use]
    pub fn viewport(mut self, viewport: Option<Size>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Derive a placement per panel, in deck order.
    pub fn placements(&self) -> Vec<PanelPlacement> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "strip_placements",
            panels = self.deck.len(),
            index = ?self.state.current(),
        )
        .entered();

        self.deck
            .iter()
            .enumerate()
            .map(|(index, panel)| PanelPlacement {
                index,
                key: panel.key.clone(),
                horizontal: self.state.offset(index, Axis::Horizontal, self.viewport),
                vertical: self.state.offset(index, Axis::Vertical, self.viewport),
                active: self.state.is_active(index),
            })
            .collect()
    }

    /// The panel at the current index, once initialized.
    pub fn active_panel(&self) -> Option<&'a Panel> {
        self.deck.get(self.state.current()?)
    }

    /// Whether the panel at `index` may receive keyboard focus on its
    /// call-to-action. Only ever true for the active panel.
    pub fn is_focusable(&self, index: usize) -> bool {
        self.state.is_active(index)
            && self
                .deck
                .get(index)
                .is_some_and(|panel| panel.call_to_action.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmstrip_core::panel::{CallToAction, ImageRef};

    fn deck(n: usize) -> PanelDeck {
        let panels = (0..n)
            .map(|i| {
                Panel::new(
                    format!("header {i}"),
                    format!("body {i}"),
                    ImageRef::new(format!("img://{i}")),
                    PanelKey::new(format!("panel-{i}")),
                )
                .call_to_action(CallToAction::new("Sign Up", "account-access"))
            })
            .collect();
        PanelDeck::new(panels).unwrap()
    }

    fn ready(n: usize) -> CarouselState {
        let mut state = CarouselState::new(n);
        state.initialize();
        state
    }

    #[test]
    fn active_panel_sits_at_origin() {
        let deck = deck(4);
        let mut state = ready(4);
        state.jump_to(2);
        let placements = Strip::new(&deck, &state)
            .viewport(Some(Size::new(300, 200)))
            .placements();

        assert_eq!(placements.len(), 4);
        assert_eq!(placements[2].horizontal, 0);
        assert_eq!(placements[2].vertical, 0);
        assert!(placements[2].active);
    }

    #[test]
    fn neighbors_sit_at_extent_multiples() {
        let deck = deck(4);
        let mut state = ready(4);
        state.jump_to(1);
        let placements = Strip::new(&deck, &state)
            .viewport(Some(Size::new(300, 200)))
            .placements();

        assert_eq!(placements[0].horizontal, -300);
        assert_eq!(placements[0].vertical, -200);
        assert_eq!(placements[2].horizontal, 300);
        assert_eq!(placements[3].horizontal, 600);
    }

    #[test]
    fn exactly_one_placement_is_active() {
        let deck = deck(5);
        let mut state = ready(5);
        state.jump_to(3);
        let placements = Strip::new(&deck, &state).placements();
        let active: Vec<usize> = placements
            .iter()
            .filter(|p| p.active)
            .map(|p| p.index)
            .collect();
        assert_eq!(active, vec![3]);
    }

    #[test]
    fn unmeasured_strip_collapses_to_origin() {
        let deck = deck(3);
        let mut state = ready(3);
        state.advance();
        let placements = Strip::new(&deck, &state).placements();
        for p in &placements {
            assert_eq!((p.horizontal, p.vertical), (0, 0));
        }
    }

    #[test]
    fn uninitialized_strip_has_no_active_panel() {
        let deck = deck(3);
        let state = CarouselState::new(3);
        let strip = Strip::new(&deck, &state).viewport(Some(Size::new(300, 200)));
        assert!(strip.active_panel().is_none());
        assert!(strip.placements().iter().all(|p| !p.active));
    }

    #[test]
    fn placements_carry_panel_keys_in_order() {
        let deck = deck(3);
        let state = ready(3);
        let placements = Strip::new(&deck, &state).placements();
        let keys: Vec<&str> = placements.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["panel-0", "panel-1", "panel-2"]);
    }

    #[test]
    fn only_active_cta_is_focusable() {
        let deck = deck(4);
        let mut state = ready(4);
        state.jump_to(1);
        let strip = Strip::new(&deck, &state);
        assert!(strip.is_focusable(1));
        assert!(!strip.is_focusable(0));
        assert!(!strip.is_focusable(2));
        assert!(!strip.is_focusable(3));
    }

    #[test]
    fn panel_without_cta_is_never_focusable() {
        let panels = vec![Panel::new(
            "h",
            "b",
            ImageRef::new("img://a"),
            PanelKey::new("a"),
        )];
        let deck = PanelDeck::new(panels).unwrap();
        let state = ready(1);
        let strip = Strip::new(&deck, &state);
        assert!(!strip.is_focusable(0));
    }

    #[test]
    fn active_panel_returns_the_current_record() {
        let deck = deck(4);
        let mut state = ready(4);
        state.jump_to(2);
        let strip = Strip::new(&deck, &state);
        assert_eq!(strip.active_panel().unwrap().key.as_str(), "panel-2");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn placement_offsets_are_consecutive_extent_multiples(
                n in 1usize..12,
                target in 0usize..12,
                width in 1u32..5_000,
                height in 1u32..5_000,
            ) {
                let deck = deck(n);
                let mut state = ready(n);
                state.jump_to(target % n);
                let placements = Strip::new(&deck, &state)
                    .viewport(Some(Size::new(width, height)))
                    .placements();

                for pair in placements.windows(2) {
                    prop_assert_eq!(
                        pair[1].horizontal - pair[0].horizontal,
                        i64::from(width)
                    );
                    prop_assert_eq!(
                        pair[1].vertical - pair[0].vertical,
                        i64::from(height)
                    );
                }
                let active = &placements[target % n];
                prop_assert_eq!(active.horizontal, 0);
                prop_assert_eq!(active.vertical, 0);
            }
        }
    }
}
