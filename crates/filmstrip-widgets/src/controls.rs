#![forbid(unsafe_code)]

//! Navigation controls and the keyboard focus order.

use filmstrip_core::event::CarouselEvent;
use filmstrip_core::panel::PanelDeck;
use filmstrip_core::state::CarouselState;

/// The two step-wise navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    /// Steps back one panel, wrapping past the start.
    Prev,
    /// Steps forward one panel, wrapping past the end.
    Next,
}

impl NavControl {
    /// The event a press on this control produces.
    pub fn event(&self) -> CarouselEvent {
        match self {
            Self::Prev => CarouselEvent::Prev,
            Self::Next => CarouselEvent::Next,
        }
    }

    /// Glyph for the control's arrow.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Prev => "‹",
            Self::Next => "›",
        }
    }

    /// Accessible label for the control.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Prev => "previous panel",
            Self::Next => "next panel",
        }
    }
}

/// One entry in the carousel's keyboard focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStop {
    /// The call-to-action of the panel at the given index.
    CallToAction(usize),
    /// The indicator dot for the given panel position.
    Indicator(usize),
    /// The previous button.
    PrevButton,
    /// The next button.
    NextButton,
}

/// Derive the keyboard focus order for a mounted carousel.
///
/// Follows the visual order: the active panel's call-to-action (non-active
/// panels' interactive content is excluded from the tab order entirely),
/// then one stop per indicator dot, then the prev and next buttons. An
/// uninitialized carousel exposes only the static controls.
pub fn tab_stops(deck: &PanelDeck, state: &CarouselState) -> Vec<TabStop> {
    let mut stops = Vec::with_capacity(deck.len() + 3);

    if let Some(index) = state.current()
        && deck.get(index).is_some_and(|p| p.call_to_action.is_some())
    {
        stops.push(TabStop::CallToAction(index));
    }
    for position in 0..deck.len() {
        stops.push(TabStop::Indicator(position));
    }
    stops.push(TabStop::PrevButton);
    stops.push(TabStop::NextButton);
    stops
}
