use eframe::egui::{
    Color32, CornerRadius, FontId, Frame, Margin, Painter, Pos2, Rect, RichText, Ui, vec2,
};

use crate::ui::config::UiPalette;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, muted text (hints, category labels).
    fn label_subdued(&mut self, text: impl Into<String>, palette: &UiPalette);

    /// Renders a section header in the accent heading colour.
    fn label_header(&mut self, text: impl Into<String>, palette: &UiPalette);

    /// Renders a rounded "pill" (card tags).
    fn pill(&mut self, text: &str, palette: &UiPalette);

    /// Renders the badge label overlaid on cards and in the modal.
    fn badge(&mut self, text: &str, palette: &UiPalette);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>, palette: &UiPalette) {
        self.label(RichText::new(text).small().color(palette.muted));
    }

    fn label_header(&mut self, text: impl Into<String>, palette: &UiPalette) {
        let text = text.into().to_uppercase();
        self.heading(RichText::new(text).color(palette.heading).strong());
    }

    fn pill(&mut self, text: &str, palette: &UiPalette) {
        Frame::new()
            .fill(palette.pill_fill)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::symmetric(8, 2))
            .show(self, |ui| {
                ui.label(RichText::new(text).small().color(palette.text));
            });
    }

    fn badge(&mut self, text: &str, palette: &UiPalette) {
        Frame::new()
            .fill(palette.badge_fill)
            .corner_radius(CornerRadius::same(4))
            .inner_margin(Margin::symmetric(6, 2))
            .show(self, |ui| {
                ui.label(
                    RichText::new(text.to_uppercase())
                        .small()
                        .strong()
                        .color(palette.badge_text),
                );
            });
    }
}

/// Struck-through, dimmed text for a previous price.
pub fn struck(text: impl Into<String>, color: Color32) -> RichText {
    RichText::new(text).strikethrough().small().color(color)
}

/// Paints a badge over already-drawn content (card images) with its top-left at `anchor`.
pub fn paint_badge(painter: &Painter, anchor: Pos2, text: &str, palette: &UiPalette) {
    let galley = painter.layout_no_wrap(
        text.to_uppercase(),
        FontId::proportional(11.0),
        palette.badge_text,
    );
    let rect = Rect::from_min_size(anchor, galley.size() + vec2(12.0, 4.0));
    painter.rect_filled(rect, CornerRadius::same(4), palette.badge_fill);
    painter.galley(rect.center() - galley.size() / 2.0, galley, palette.badge_text);
}
