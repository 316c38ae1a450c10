use eframe::egui::{Align, Button, ComboBox, Key, Layout, RichText, TextEdit, Ui};

use crate::catalog::CatalogQuery;
use crate::domain::Theme;
use crate::peripheral::Section;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

pub fn section_label(section: Section) -> &'static str {
    match section {
        Section::Hero => UI_TEXT.brand,
        Section::Products => UI_TEXT.nav_products,
        Section::About => UI_TEXT.nav_about,
        Section::Contact => UI_TEXT.nav_contact,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEvent {
    TextChanged(String),
    CategoryChanged(String),
    SearchToggled,
    SearchCollapsed,
}

/// Search box plus category selector above the grid
pub struct FilterPanel<'a> {
    query: &'a CatalogQuery,
    categories: &'a [String],
    search_expanded: bool,
    focus_search: bool,
}

impl<'a> FilterPanel<'a> {
    pub fn new(
        query: &'a CatalogQuery,
        categories: &'a [String],
        search_expanded: bool,
        focus_search: bool,
    ) -> Self {
        Self {
            query,
            categories,
            search_expanded,
            focus_search,
        }
    }

    fn render_search(&mut self, ui: &mut Ui) -> Vec<FilterEvent> {
        let mut events = Vec::new();

        if ui
            .add(Button::new(UI_TEXT.search_trigger).selected(self.search_expanded))
            .clicked()
        {
            events.push(FilterEvent::SearchToggled);
        }

        if !self.search_expanded {
            if !self.query.text.is_empty() {
                ui.label(RichText::new(format!("\"{}\"", self.query.text)).italics());
            }
            return events;
        }

        let mut text = self.query.text.clone();
        let response = ui.add(
            TextEdit::singleline(&mut text)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(240.0),
        );
        if self.focus_search {
            response.request_focus();
        }
        if response.changed() {
            events.push(FilterEvent::TextChanged(text));
        }
        let cancelled = ui.input(|i| i.key_pressed(Key::Escape));
        if response.lost_focus() || (cancelled && response.has_focus()) {
            events.push(FilterEvent::SearchCollapsed);
        }

        events
    }

    fn render_category_selector(&mut self, ui: &mut Ui) -> Option<String> {
        let mut selected = self.query.category.clone();
        let selected_text = if selected.is_empty() {
            UI_TEXT.all_categories.to_string()
        } else {
            selected.clone()
        };

        ComboBox::from_id_salt("category_selector")
            .selected_text(selected_text)
            .width(220.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, String::new(), UI_TEXT.all_categories);
                for category in self.categories {
                    ui.selectable_value(&mut selected, category.clone(), category.as_str());
                }
            });

        (selected != self.query.category).then_some(selected)
    }
}

impl<'a> Panel for FilterPanel<'a> {
    type Event = FilterEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal_wrapped(|ui| {
            events.extend(self.render_search(ui));
            ui.add_space(12.0);
            if let Some(category) = self.render_category_selector(ui) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("Category selected: '{}'", category);
                }
                events.push(FilterEvent::CategoryChanged(category));
            }
        });
        events
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Logo,
    Goto(Section),
    ToggleTheme,
    ToggleMenu,
}

/// Top navigation bar. On narrow screens the links move into a menu.
pub struct NavBar {
    theme: Theme,
    active: Option<Section>,
    narrow: bool,
    menu_open: bool,
}

impl NavBar {
    pub fn new(theme: Theme, active: Option<Section>, narrow: bool, menu_open: bool) -> Self {
        Self {
            theme,
            active,
            narrow,
            menu_open,
        }
    }

    fn render_links<I>(&self, ui: &mut Ui, sections: I, events: &mut Vec<NavEvent>)
    where
        I: IntoIterator<Item = Section>,
    {
        for section in sections {
            let button = Button::new(section_label(section))
                .selected(self.active == Some(section))
                .frame(false);
            if ui.add(button).clicked() {
                events.push(NavEvent::Goto(section));
            }
        }
    }
}

impl Panel for NavBar {
    type Event = NavEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        let palette = UI_CONFIG.palette(self.theme);

        ui.horizontal(|ui| {
            let logo = RichText::new(UI_TEXT.brand)
                .strong()
                .size(20.0)
                .color(palette.heading);
            if ui.add(Button::new(logo).frame(false)).clicked() {
                events.push(NavEvent::Logo);
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let theme_icon = if self.theme.is_dark() {
                    UI_TEXT.theme_to_light
                } else {
                    UI_TEXT.theme_to_dark
                };
                if ui.button(theme_icon).clicked() {
                    events.push(NavEvent::ToggleTheme);
                }

                if self.narrow {
                    if ui
                        .add(Button::new(UI_TEXT.menu_button).selected(self.menu_open))
                        .clicked()
                    {
                        events.push(NavEvent::ToggleMenu);
                    }
                } else {
                    // Right-to-left layout: add in reverse so they read left to right
                    self.render_links(ui, Section::LINKED.into_iter().rev(), &mut events);
                }
            });
        });

        if self.narrow && self.menu_open {
            ui.vertical(|ui| self.render_links(ui, Section::LINKED, &mut events));
        }

        events
    }
}
