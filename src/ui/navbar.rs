use eframe::egui::{
    Align, Button, Color32, Context, CornerRadius, Layout, RichText, Stroke, TopBottomPanel,
};

use crate::app::App;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, nav::Route, ui_text::ICON_WALLET};
use crate::wallet::WalletConnectionState;

impl App {
    pub(crate) fn render_navbar(&mut self, ctx: &Context) {
        TopBottomPanel::top("navbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let brand = ui.add(
                        Button::new(
                            RichText::new(UI_TEXT.brand)
                                .size(20.0)
                                .strong()
                                .color(UI_CONFIG.colors.brand),
                        )
                        .fill(Color32::TRANSPARENT),
                    );
                    if brand.clicked() {
                        self.navigate_from_chrome("/");
                    }

                    ui.add_space(16.0);

                    let route = self.nav.current();
                    if ui.nav_link(UI_TEXT.nav_home, route == Route::Home) {
                        self.navigate_from_chrome("/");
                    }
                    if ui.nav_link(UI_TEXT.nav_marketplace, route == Route::Marketplace) {
                        self.navigate_from_chrome("/market-place");
                    }
                    // Buy/Sell land on home for now, same as the marketing site.
                    if ui.nav_link(UI_TEXT.nav_buy, false) {
                        self.navigate_from_chrome("/");
                    }
                    if ui.nav_link(UI_TEXT.nav_sell, false) {
                        self.navigate_from_chrome("/");
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.render_wallet_control(ui);
                    });
                });
            });
    }

    /// The connect-button stand-in: one control, label follows the session
    /// state, plus status text for errors right next to it.
    fn render_wallet_control(&mut self, ui: &mut eframe::egui::Ui) {
        let state = self.wallet.state().clone();
        let label = format!("{} {}", ICON_WALLET, state.status_label());

        match state {
            WalletConnectionState::Disconnected | WalletConnectionState::Error(_) => {
                let button = Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(UI_CONFIG.colors.brand)
                    .corner_radius(CornerRadius::same(12));
                if ui.add(button).clicked() {
                    self.wallet.request_connect();
                }
                if let WalletConnectionState::Error(reason) = &state {
                    // Surfaced as-is; retry stays in the user's hands.
                    ui.label(
                        RichText::new(format!("({reason})"))
                            .small()
                            .color(UI_CONFIG.colors.error),
                    );
                }
            }
            WalletConnectionState::Connecting => {
                ui.add_enabled(
                    false,
                    Button::new(RichText::new(label).color(UI_CONFIG.colors.label))
                        .fill(UI_CONFIG.colors.card)
                        .corner_radius(CornerRadius::same(12)),
                );
                ui.spinner();
            }
            WalletConnectionState::Connected { .. } => {
                let button = Button::new(RichText::new(label).color(Color32::WHITE))
                    .fill(UI_CONFIG.colors.card)
                    .stroke(Stroke::new(1.0, UI_CONFIG.colors.card_border))
                    .corner_radius(CornerRadius::same(12));
                if ui.add(button).on_hover_text("Disconnect").clicked() {
                    self.wallet.request_disconnect();
                }
            }
        }
    }
}
