use eframe::egui::{CentralPanel, Context, RichText};

use crate::app::App;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

impl App {
    pub(crate) fn tick_not_found_state(&mut self, ctx: &Context) {
        let mut go_home = false;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.heading(
                        RichText::new(UI_TEXT.nf_code)
                            .size(48.0)
                            .strong()
                            .color(UI_CONFIG.colors.brand),
                    );
                    ui.label(RichText::new(UI_TEXT.nf_title).size(22.0));
                    ui.add_space(8.0);
                    ui.label(RichText::new(UI_TEXT.nf_body).color(UI_CONFIG.colors.label));
                    ui.add_space(16.0);
                    ui.scope(|ui| {
                        ui.set_max_width(160.0);
                        if ui.cta_button(UI_TEXT.btn_go_home, UI_CONFIG.colors.brand) {
                            go_home = true;
                        }
                    });
                });
            });

        if go_home {
            self.navigate_from_chrome("/");
        }
    }
}
