#![forbid(unsafe_code)]

//! Indicator bar widget: one dot per panel, selected dot for the current index.

use filmstrip_core::event::CarouselEvent;
use filmstrip_core::state::CarouselState;
use unicode_width::UnicodeWidthStr;

/// A row of per-panel indicator dots.
///
/// Each dot is a pressable control that jumps straight to its panel; the
/// dot for the current index renders in the selected state.
#[derive(Debug, Clone)]
pub struct IndicatorBar<'a> {
    count: usize,
    selected: Option<usize>,
    active_symbol: &'a str,
    inactive_symbol: &'a str,
}

impl<'a> IndicatorBar<'a> {
    /// Create a bar for `count` panels with nothing selected.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            selected: None,
            active_symbol: "●",
            inactive_symbol: "○",
        }
    }

    /// Create a bar reflecting the carousel state.
    pub fn from_state(state: &CarouselState) -> Self {
        let mut bar = Self::new(state.len());
        bar.selected = state.current();
        bar
    }

    /// Set the selected position.
    #[must_use]
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    /// Set the symbols used for the selected and unselected dots.
    #[must_use]
    pub fn symbols(mut self, active: &'a str, inactive: &'a str) -> Self {
        self.active_symbol = active;
        self.inactive_symbol = inactive;
        self
    }

    /// Number of dots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the dot at `position` renders in the selected state.
    pub fn is_selected(&self, position: usize) -> bool {
        self.selected == Some(position)
    }

    /// The event a press on the dot at `position` produces.
    ///
    /// `None` for positions outside the bar; in-range presses always map to
    /// a direct jump, which is the only non-±1 index transition.
    pub fn press(&self, position: usize) -> Option<CarouselEvent> {
        (position < self.count).then_some(CarouselEvent::Select(position))
    }

    /// Textual form of the bar, capped at `max_width` display columns.
    ///
    /// Returns `None` when the dots cannot fit, leaving the fallback to the
    /// caller. Symbol widths are measured in display columns, not bytes.
    pub fn format_for_width(&self, max_width: usize) -> Option<String> {
        if self.count == 0 || max_width == 0 {
            return None;
        }

        let active_width = UnicodeWidthStr::width(self.active_symbol);
        let inactive_width = UnicodeWidthStr::width(self.inactive_symbol);
        let symbol_width = active_width.max(inactive_width);
        if symbol_width == 0 || self.count > max_width / symbol_width {
            return None;
        }

        let mut out = String::new();
        for position in 0..self.count {
            if self.is_selected(position) {
                out.push_str(self.active_symbol);
            } else {
                out.push_str(self.inactive_symbol);
            }
        }

        if UnicodeWidthStr::width(out.as_str()) > max_width {
            return None;
        }
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_at(n: usize, index: usize) -> CarouselState {
        let mut state = CarouselState::new(n);
        state.initialize();
        state.jump_to(index);
        state
    }

    #[test]
    fn from_state_selects_current() {
        let bar = IndicatorBar::from_state(&ready_at(4, 2));
        assert_eq!(bar.count(), 4);
        assert!(bar.is_selected(2));
        assert!(!bar.is_selected(0));
    }

    #[test]
    fn uninitialized_state_selects_nothing() {
        let state = CarouselState::new(4);
        let bar = IndicatorBar::from_state(&state);
        for position in 0..4 {
            assert!(!bar.is_selected(position));
        }
    }

    #[test]
    fn press_maps_to_select_event() {
        let bar = IndicatorBar::new(4);
        assert_eq!(bar.press(0), Some(CarouselEvent::Select(0)));
        assert_eq!(bar.press(3), Some(CarouselEvent::Select(3)));
    }

    #[test]
    fn press_out_of_range_is_none() {
        let bar = IndicatorBar::new(4);
        assert_eq!(bar.press(4), None);
        assert_eq!(bar.press(100), None);
    }

    #[test]
    fn format_marks_the_selected_dot() {
        let bar = IndicatorBar::from_state(&ready_at(5, 2)).symbols("*", ".");
        assert_eq!(bar.format_for_width(10).as_deref(), Some("..*.."));
    }

    #[test]
    fn format_first_and_last() {
        let first = IndicatorBar::from_state(&ready_at(5, 0)).symbols("*", ".");
        assert_eq!(first.format_for_width(10).as_deref(), Some("*...."));
        let last = IndicatorBar::from_state(&ready_at(5, 4)).symbols("*", ".");
        assert_eq!(last.format_for_width(10).as_deref(), Some("....*"));
    }

    #[test]
    fn format_default_symbols() {
        let bar = IndicatorBar::from_state(&ready_at(3, 1));
        assert_eq!(bar.format_for_width(10).as_deref(), Some("○●○"));
    }

    #[test]
    fn format_refuses_when_too_narrow() {
        let bar = IndicatorBar::new(10).symbols("*", ".");
        assert_eq!(bar.format_for_width(5), None);
    }

    #[test]
    fn format_zero_width_is_none() {
        let bar = IndicatorBar::new(3);
        assert_eq!(bar.format_for_width(0), None);
    }

    #[test]
    fn format_zero_count_is_none() {
        let bar = IndicatorBar::new(0);
        assert_eq!(bar.format_for_width(10), None);
    }

    #[test]
    fn format_wide_symbols_count_columns() {
        // Fullwidth symbols occupy two columns: 4 dots need 8.
        let bar = IndicatorBar::new(4).symbols("＊", "．");
        assert!(bar.format_for_width(7).is_none());
        assert!(bar.format_for_width(8).is_some());
    }
}
