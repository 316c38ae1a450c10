use eframe::egui::Color32;

use crate::domain::Theme;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// Colours for one theme
#[derive(Clone, Copy)]
pub struct UiPalette {
    pub background: Color32,
    pub panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
    pub text: Color32,
    pub muted: Color32,
    pub heading: Color32,
    pub accent: Color32,
    pub badge_fill: Color32,
    pub badge_text: Color32,
    pub pill_fill: Color32,
    pub contact: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub dark: UiPalette,
    pub light: UiPalette,
    pub nav_height: f32,
}

impl UiConfig {
    pub fn palette(&self, theme: Theme) -> &UiPalette {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    dark: UiPalette {
        background: Color32::from_rgb(12, 12, 14),
        panel: Color32::from_rgb(20, 20, 24),
        card: Color32::from_rgb(28, 28, 33),
        card_border: Color32::from_rgb(48, 48, 56),
        text: Color32::from_rgb(235, 235, 240),
        muted: Color32::from_rgb(150, 150, 160),
        heading: Color32::from_rgb(255, 196, 0),
        accent: Color32::from_rgb(255, 140, 0),
        badge_fill: Color32::from_rgb(255, 140, 0),
        badge_text: Color32::BLACK,
        pill_fill: Color32::from_rgb(44, 44, 52),
        contact: Color32::from_rgb(37, 211, 102),
    },
    light: UiPalette {
        background: Color32::from_rgb(246, 246, 248),
        panel: Color32::WHITE,
        card: Color32::WHITE,
        card_border: Color32::from_rgb(220, 220, 228),
        text: Color32::from_rgb(24, 24, 28),
        muted: Color32::from_rgb(110, 110, 120),
        heading: Color32::from_rgb(200, 90, 0),
        accent: Color32::from_rgb(230, 110, 0),
        badge_fill: Color32::from_rgb(230, 110, 0),
        badge_text: Color32::WHITE,
        pill_fill: Color32::from_rgb(236, 236, 242),
        contact: Color32::from_rgb(18, 140, 70),
    },
    nav_height: 56.0,
};
