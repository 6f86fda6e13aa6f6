use eframe::egui::{
    Align2, Button, Color32, CornerRadius, FontId, RichText, Sense, Stroke, Ui, Vec2,
};

use crate::catalog::ListingImage;
use crate::ui::{UI_CONFIG, ui_text::listing_image_glyph};

pub(crate) fn section_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .size(20.0)
        .strong()
        .color(UI_CONFIG.colors.brand)
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    /// "Label: value" row with tight spacing.
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    /// Pill-shaped navbar link; returns true on click.
    fn nav_link(&mut self, text: &str, active: bool) -> bool;
    /// Wide colored call-to-action button; returns true on click.
    fn cta_button(&mut self, text: &str, fill: Color32) -> bool;
    /// Painted placeholder standing in for listing artwork.
    fn listing_artwork(&mut self, image: ListingImage, size: Vec2);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn nav_link(&mut self, text: &str, active: bool) -> bool {
        let color = if active {
            UI_CONFIG.colors.heading
        } else {
            UI_CONFIG.colors.label
        };
        let button = Button::new(RichText::new(text).color(color))
            .fill(Color32::TRANSPARENT)
            .corner_radius(CornerRadius::same(12));
        self.add(button).clicked()
    }

    fn cta_button(&mut self, text: &str, fill: Color32) -> bool {
        let button = Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(fill)
            .stroke(Stroke::NONE)
            .corner_radius(CornerRadius::same(12))
            .min_size(Vec2::new(self.available_width(), 26.0));
        self.add(button).clicked()
    }

    fn listing_artwork(&mut self, image: ListingImage, size: Vec2) {
        let (rect, _response) = self.allocate_exact_size(size, Sense::hover());
        if self.is_rect_visible(rect) {
            let painter = self.painter();
            let tint = match image {
                ListingImage::OilDrum => Color32::from_rgb(31, 41, 55),
                ListingImage::PriceChart => Color32::from_rgb(30, 41, 80),
                ListingImage::Refinery => Color32::from_rgb(41, 37, 36),
            };
            painter.rect_filled(rect, CornerRadius::same(10), tint);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                listing_image_glyph(image),
                FontId::proportional(size.y * 0.45),
                UI_CONFIG.colors.label,
            );
        }
    }
}
