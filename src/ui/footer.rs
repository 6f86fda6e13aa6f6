use eframe::egui::{Align, Context, Layout, RichText, TopBottomPanel};

use crate::app::App;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

impl App {
    pub(crate) fn render_footer(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("footer")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.brand)
                            .strong()
                            .color(UI_CONFIG.colors.brand),
                    );
                    ui.label_subdued(UI_TEXT.tagline);
                    ui.separator();
                    ui.label_subdued(UI_TEXT.footer_rights);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.hyperlink_to("GitHub", "https://github.com/");
                        ui.hyperlink_to("Twitter", "https://twitter.com/");
                    });
                });
            });
    }
}
