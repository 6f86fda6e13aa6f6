use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub brand: Color32,
    /// Active order-sizing option and other highlights.
    pub accent: Color32,
    pub accent_text: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub buy: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::WHITE,
        brand: Color32::from_rgb(218, 81, 211), // The magenta accent from the brand theme
        accent: Color32::from_rgb(250, 204, 21), // Yellow - active sizing option
        accent_text: Color32::BLACK,
        central_panel: Color32::from_rgb(3, 7, 16), // Near-black navy
        side_panel: Color32::from_rgb(10, 14, 24),
        card: Color32::from_rgb(17, 24, 39),
        card_border: Color32::from_rgb(55, 65, 81),
        buy: Color32::from_rgb(21, 128, 61), // Green "Buy now"
        error: Color32::from_rgb(239, 68, 68),
    },
};

impl UiConfig {
    /// Frame for the top navbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the footer (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4), // Tighter vertically
            ..Default::default()
        }
    }

    /// Frame for the screen body
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for listing / feature cards
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(10),
            corner_radius: eframe::egui::CornerRadius::same(10),
            ..Default::default()
        }
    }
}
