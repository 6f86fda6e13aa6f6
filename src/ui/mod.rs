pub mod nav;

mod footer;
mod navbar;
mod order_sizer;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub use order_sizer::{OrderSizer, PERCENTAGE_OPTIONS, PercentageChoice};
pub use ui_text::platform_icon_glyph;

pub(crate) use styles::{UiStyleExt, section_heading};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
