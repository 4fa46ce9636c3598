#![forbid(unsafe_code)]

//! Panel content records and the deck that holds them.
//!
//! Panels are opaque to the carousel: it never inspects headers, bodies, or
//! image references, only counts and keys. The deck is fixed at construction
//! and never mutated afterwards.

use std::fmt;

/// Stable identifier for a panel.
///
/// Keys survive reordering in the rendering layer; two panels in one deck
/// should not share a key, but the core does not enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelKey(String);

impl PanelKey {
    /// Create a key from any string-like value.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to a panel image.
///
/// The carousel never fetches or decodes the target; the rendering layer
/// owns resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef(String);

impl ImageRef {
    /// Create an image reference.
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The interactive control inside a panel overlay.
///
/// Only the active panel's call-to-action participates in keyboard focus
/// order; see the widgets crate for the tab-stop derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallToAction {
    /// Button label.
    pub label: String,
    /// Opaque link target.
    pub target: String,
}

impl CallToAction {
    /// Create a call-to-action record.
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// One slide's immutable content record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel {
    /// Headline text.
    pub header: String,
    /// Body copy.
    pub body: String,
    /// Image reference for the panel backdrop.
    pub image: ImageRef,
    /// Stable identity for the rendering layer.
    pub key: PanelKey,
    /// Optional interactive control shown on the overlay.
    #[cfg_attr(feature = "serde", serde(default))]
    pub call_to_action: Option<CallToAction>,
}

impl Panel {
    /// Create a panel with no call-to-action.
    pub fn new(
        header: impl Into<String>,
        body: impl Into<String>,
        image: ImageRef,
        key: PanelKey,
    ) -> Self {
        Self {
            header: header.into(),
            body: body.into(),
            image,
            key,
            call_to_action: None,
        }
    }

    /// Attach a call-to-action control.
    #[must_use]
    pub fn call_to_action(mut self, cta: CallToAction) -> Self {
        self.call_to_action = Some(cta);
        self
    }
}

/// Error constructing a [`PanelDeck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// A deck must hold at least one panel; modular index arithmetic is
    /// undefined over an empty sequence.
    Empty,
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "panel deck must contain at least one panel"),
        }
    }
}

impl std::error::Error for DeckError {}

/// A fixed, ordered, non-empty sequence of panels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Panel>", into = "Vec<Panel>"))]
pub struct PanelDeck {
    panels: Vec<Panel>,
}

impl PanelDeck {
    /// Create a deck from an ordered panel list.
    ///
    /// Refuses an empty list rather than allow a zero-length cycle.
    pub fn new(panels: Vec<Panel>) -> Result<Self, DeckError> {
        if panels.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { panels })
    }

    /// Number of panels. Always at least 1.
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Always `false`: construction refuses empty decks.
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panel at the given index, if in range.
    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// The ordered panel slice.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Iterate over panels in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }
}

impl TryFrom<Vec<Panel>> for PanelDeck {
    type Error = DeckError;

    fn try_from(panels: Vec<Panel>) -> Result<Self, Self::Error> {
        Self::new(panels)
    }
}

impl From<PanelDeck> for Vec<Panel> {
    fn from(deck: PanelDeck) -> Self {
        deck.panels
    }
}
