use eframe::egui::{Context, CornerRadius, Stroke, Ui, Visuals};

use crate::domain::Theme;
use crate::ui::config::UI_CONFIG;
use crate::ui::styles::UiStyleExt;

/// Sets up visuals for the whole application for the given theme
pub fn setup_custom_visuals(ctx: &Context, theme: Theme) {
    let palette = UI_CONFIG.palette(theme);
    let mut visuals = if theme.is_dark() {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.panel_fill = palette.background;
    visuals.window_fill = palette.panel;
    visuals.extreme_bg_color = palette.card;
    visuals.window_stroke = Stroke::new(1.0, palette.card_border);
    visuals.window_corner_radius = CornerRadius::same(12);
    visuals.hyperlink_color = palette.contact;
    visuals.selection.bg_fill = palette.accent;

    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.fg_stroke.color = palette.text;
    visuals.widgets.hovered.fg_stroke.color = palette.heading;
    visuals.widgets.active.fg_stroke.color = palette.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>, theme: Theme) {
    ui.add_space(24.0);
    ui.label_header(text, UI_CONFIG.palette(theme));
    ui.add_space(12.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats a price the way the store quotes them: `$1.250.000`.
/// Fractions are rounded; negative values keep their sign.
pub fn format_price(price: f64) -> String {
    let rounded = price.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// One row of a bulleted list.
pub fn bullet_item(text: &str) -> String {
    format!("• {}", text)
}
