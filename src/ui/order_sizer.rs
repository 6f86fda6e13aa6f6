use eframe::egui::{Button, CornerRadius, RichText, Stroke, Ui};

use crate::ui::UI_CONFIG;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Fixed order-sizing steps, in display order. Statically enumerated -
/// nothing user-typed ever reaches `select`.
pub const PERCENTAGE_OPTIONS: [u8; 5] = [10, 25, 50, 75, 100];

/// Current sizing choice. "Nothing picked yet" is its own variant so every
/// state is nameable (no nullable field to forget about).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PercentageChoice {
    #[default]
    Unselected,
    Selected(u8),
}

/// Percentage-of-quantity selector for the trade screen.
///
/// At most one option is active; selecting another fully replaces it. The
/// widget owns no state beyond the choice, and is dropped with the screen -
/// a remount starts back at `Unselected`.
#[derive(Default, Clone)]
pub struct OrderSizer {
    choice: PercentageChoice,
}

impl OrderSizer {
    pub fn choice(&self) -> PercentageChoice {
        self.choice
    }

    pub fn selected_percent(&self) -> Option<u8> {
        match self.choice {
            PercentageChoice::Selected(p) => Some(p),
            PercentageChoice::Unselected => None,
        }
    }

    /// Replace the active choice and report it synchronously through
    /// `on_select`, within the same interaction - the caller drives its
    /// downstream computation (sized quantity) right here.
    ///
    /// `percent` must be one of `PERCENTAGE_OPTIONS`; anything else is a
    /// caller bug, not a recoverable condition.
    pub fn select(&mut self, percent: u8, mut on_select: impl FnMut(u8)) {
        assert!(
            PERCENTAGE_OPTIONS.contains(&percent),
            "percentage {percent} is not a configured option"
        );

        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("sizer: {:?} -> Selected({percent})", self.choice);
        }

        self.choice = PercentageChoice::Selected(percent);
        on_select(percent);
    }

    /// Draw the option row. A click lands in `on_select` this same frame.
    pub fn show(&mut self, ui: &mut Ui, mut on_select: impl FnMut(u8)) {
        ui.horizontal(|ui| {
            for &percent in &PERCENTAGE_OPTIONS {
                let active = self.choice == PercentageChoice::Selected(percent);
                let (fill, text_color) = if active {
                    (UI_CONFIG.colors.accent, UI_CONFIG.colors.accent_text)
                } else {
                    (UI_CONFIG.colors.card, UI_CONFIG.colors.label)
                };
                let button = Button::new(RichText::new(format!("{percent}%")).color(text_color))
                    .fill(fill)
                    .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
                    .corner_radius(CornerRadius::same(6));
                if ui.add(button).clicked() {
                    self.select(percent, &mut on_select);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_option_selects_and_notifies_exactly_once() {
        for &percent in &PERCENTAGE_OPTIONS {
            let mut sizer = OrderSizer::default();
            let mut calls = Vec::new();
            sizer.select(percent, |p| calls.push(p));
            assert_eq!(calls, vec![percent]);
            assert_eq!(sizer.choice(), PercentageChoice::Selected(percent));
        }
    }

    #[test]
    fn new_selection_fully_replaces_the_old_one() {
        let mut sizer = OrderSizer::default();
        let mut calls = Vec::new();
        sizer.select(25, |p| calls.push(p));
        sizer.select(75, |p| calls.push(p));
        // Notified in order, and only the later choice is active.
        assert_eq!(calls, vec![25, 75]);
        assert_eq!(sizer.choice(), PercentageChoice::Selected(75));
        assert_eq!(sizer.selected_percent(), Some(75));
    }

    #[test]
    fn reselecting_the_active_option_is_idempotent() {
        let mut sizer = OrderSizer::default();
        sizer.select(50, |_| {});
        sizer.select(50, |_| {});
        assert_eq!(sizer.choice(), PercentageChoice::Selected(50));
    }

    #[test]
    fn starts_unselected_and_a_fresh_widget_forgets_everything() {
        let mut sizer = OrderSizer::default();
        assert_eq!(sizer.choice(), PercentageChoice::Unselected);
        assert_eq!(sizer.selected_percent(), None);
        sizer.select(100, |_| {});

        // "Remount": a new instance carries nothing over.
        let fresh = OrderSizer::default();
        assert_eq!(fresh.choice(), PercentageChoice::Unselected);
    }

    #[test]
    #[should_panic(expected = "not a configured option")]
    fn out_of_set_percentage_is_a_caller_bug() {
        let mut sizer = OrderSizer::default();
        sizer.select(33, |_| {});
    }
}
