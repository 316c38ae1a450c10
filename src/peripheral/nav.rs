//! Navigation chrome: highlighted link, mobile menu and the collapsible search box.

use serde::{Deserialize, Serialize};

/// Page sections reachable from the nav bar.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[strum(serialize = "inicio")]
    Hero,
    #[strum(serialize = "productos")]
    Products,
    #[strum(serialize = "nosotros")]
    About,
    #[strum(serialize = "contacto")]
    Contact,
}

impl Section {
    /// Sections that get a link in the nav bar.
    pub const LINKED: [Section; 3] = [Section::Products, Section::About, Section::Contact];
}

/// Measured vertical extent of a section inside the page scroll area.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Which nav link is highlighted for the current scroll position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavHighlight {
    active: Option<Section>,
}

impl NavHighlight {
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    /// Inside the hero nothing is highlighted. Otherwise the last section
    /// containing `scroll_y + look_ahead` wins; if none does, the previous
    /// highlight stays.
    pub fn update(
        &mut self,
        scroll_y: f32,
        look_ahead: f32,
        hero_height: f32,
        sections: &[SectionBounds],
    ) -> Option<Section> {
        let probe = scroll_y + look_ahead;
        if probe < hero_height {
            self.active = None;
            return None;
        }
        if let Some(bounds) = sections.iter().rev().find(|b| b.contains(probe)) {
            self.active = Some(bounds.section);
        }
        self.active
    }

    /// Logo click: back to the top with nothing highlighted.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Hamburger menu shown on narrow layouts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following a nav link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Search field that expands from a trigger button. Collapses on cancel or
/// when the field loses focus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchBox {
    expanded: bool,
}

impl SearchBox {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the new state; the field should take focus when it becomes expanded.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds { section: Section::Hero, top: 0.0, height: 600.0 },
            SectionBounds { section: Section::Products, top: 600.0, height: 900.0 },
            SectionBounds { section: Section::About, top: 1500.0, height: 400.0 },
            SectionBounds { section: Section::Contact, top: 1900.0, height: 300.0 },
        ]
    }

    #[test]
    fn hero_clears_highlight() {
        let mut nav = NavHighlight::default();
        assert_eq!(nav.update(0.0, 150.0, 600.0, &layout()), None);
        assert_eq!(nav.update(449.0, 150.0, 600.0, &layout()), None);
    }

    #[test]
    fn section_under_probe_is_highlighted() {
        let mut nav = NavHighlight::default();
        assert_eq!(nav.update(450.0, 150.0, 600.0, &layout()), Some(Section::Products));
        assert_eq!(nav.update(1400.0, 150.0, 600.0, &layout()), Some(Section::About));
        assert_eq!(nav.update(1800.0, 150.0, 600.0, &layout()), Some(Section::Contact));

        nav.update(0.0, 150.0, 600.0, &layout());
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn gap_below_last_section_keeps_previous_highlight() {
        let mut nav = NavHighlight::default();
        nav.update(1800.0, 150.0, 600.0, &layout());
        assert_eq!(nav.update(5000.0, 150.0, 600.0, &layout()), Some(Section::Contact));

        nav.clear();
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn section_ids_match_page_anchors() {
        assert_eq!(Section::Products.as_ref(), "productos");
        assert_eq!(Section::Hero.as_ref(), "inicio");
        assert!(!Section::LINKED.contains(&Section::Hero));
    }

    #[test]
    fn menu_and_search_box_toggle() {
        let mut menu = MobileMenu::default();
        assert!(menu.toggle());
        menu.close();
        assert!(!menu.is_open());

        let mut search = SearchBox::default();
        assert!(search.toggle());
        assert!(!search.toggle());
        search.toggle();
        search.collapse();
        assert!(!search.is_expanded());
    }
}
