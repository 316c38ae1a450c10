//! One-shot fade-in of page sections as they first scroll into view.

use std::collections::HashMap;

use crate::peripheral::nav::{Section, SectionBounds};
use crate::utils::app_time::reveal_alpha;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// How much of a section the viewport shows, in `0.0..=1.0`. Sections taller
/// than the viewport count against the viewport height, so they can still
/// reach any threshold.
pub fn visible_fraction(bounds: &SectionBounds, viewport_top: f32, viewport_height: f32) -> f32 {
    let viewport_bottom = viewport_top + viewport_height;
    if bounds.height <= 0.0 {
        let inside = bounds.top >= viewport_top && bounds.top < viewport_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let overlap = (bounds.top + bounds.height).min(viewport_bottom) - bounds.top.max(viewport_top);
    if overlap <= 0.0 || viewport_height <= 0.0 {
        return 0.0;
    }
    (overlap / bounds.height.min(viewport_height)).min(1.0)
}

/// Remembers which sections have been revealed and when. Once revealed, a
/// section stays revealed.
#[derive(Clone, Debug)]
pub struct SectionReveal {
    threshold: f32,
    revealed_at: HashMap<Section, f32>,
}

impl SectionReveal {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed_at: HashMap::new(),
        }
    }

    /// Records a visibility sample taken at `now_secs`. Returns whether the
    /// section is revealed.
    pub fn observe(&mut self, section: Section, visible_fraction: f32, now_secs: f32) -> bool {
        if self.revealed_at.contains_key(&section) {
            return true;
        }
        if visible_fraction < self.threshold {
            return false;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[reveal] {} at {:.0}% visible", section.as_ref(), visible_fraction * 100.0);
        }
        self.revealed_at.insert(section, now_secs);
        true
    }

    pub fn observe_all(
        &mut self,
        sections: &[SectionBounds],
        viewport_top: f32,
        viewport_height: f32,
        now_secs: f32,
    ) {
        for bounds in sections {
            let fraction = visible_fraction(bounds, viewport_top, viewport_height);
            self.observe(bounds.section, fraction, now_secs);
        }
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed_at.contains_key(&section)
    }

    /// 0 until revealed, then fades up to 1 over `duration_secs`.
    pub fn opacity(&self, section: Section, now_secs: f32, duration_secs: f32) -> f32 {
        match self.revealed_at.get(&section) {
            Some(at) => reveal_alpha(now_secs - at, 0.0, duration_secs),
            None => 0.0,
        }
    }

    /// True while some revealed section is still fading in.
    pub fn is_animating(&self, now_secs: f32, duration_secs: f32) -> bool {
        self.revealed_at
            .values()
            .any(|at| now_secs - at < duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(section: Section, top: f32, height: f32) -> SectionBounds {
        SectionBounds {
            section,
            top,
            height,
        }
    }

    #[test]
    fn stays_hidden_below_threshold() {
        let mut reveal = SectionReveal::new(0.1);
        assert!(!reveal.observe(Section::About, 0.0, 0.0));
        assert!(!reveal.observe(Section::About, 0.099, 0.5));
        assert!(!reveal.is_revealed(Section::About));
        assert_eq!(reveal.opacity(Section::About, 10.0, 0.6), 0.0);
    }

    #[test]
    fn latches_at_threshold() {
        let mut reveal = SectionReveal::new(0.1);
        assert!(reveal.observe(Section::Contact, 0.1, 2.0));
        assert!(reveal.is_revealed(Section::Contact));
        assert!(!reveal.is_revealed(Section::About));
    }

    #[test]
    fn never_unreveals() {
        let mut reveal = SectionReveal::new(0.1);
        reveal.observe(Section::Products, 0.5, 1.0);
        assert!(reveal.observe(Section::Products, 0.0, 5.0));
        assert!(reveal.is_revealed(Section::Products));
        assert_eq!(reveal.opacity(Section::Products, 5.0, 0.6), 1.0);
    }

    #[test]
    fn fades_in_from_the_first_reveal() {
        let mut reveal = SectionReveal::new(0.1);
        reveal.observe(Section::About, 0.3, 1.0);
        // A later sample does not restart the fade
        reveal.observe(Section::About, 0.9, 1.3);

        assert_eq!(reveal.opacity(Section::About, 1.0, 0.6), 0.0);
        assert!((reveal.opacity(Section::About, 1.3, 0.6) - 0.5).abs() < 1e-5);
        assert!(reveal.is_animating(1.3, 0.6));
        assert!(!reveal.is_animating(2.0, 0.6));
    }

    #[test]
    fn fraction_counts_the_overlap() {
        let viewport_top = 1000.0;
        let viewport_height = 800.0;
        // Starts 40 pt above the bottom edge of the viewport
        let about = bounds(Section::About, 1760.0, 400.0);
        assert!((visible_fraction(&about, viewport_top, viewport_height) - 0.1).abs() < 1e-5);
        // Entirely below
        let contact = bounds(Section::Contact, 1900.0, 300.0);
        assert_eq!(visible_fraction(&contact, viewport_top, viewport_height), 0.0);
        // Entirely inside
        let inside = bounds(Section::About, 1100.0, 200.0);
        assert_eq!(visible_fraction(&inside, viewport_top, viewport_height), 1.0);
    }

    #[test]
    fn tall_section_is_measured_against_the_viewport() {
        let products = bounds(Section::Products, 0.0, 20_000.0);
        let fraction = visible_fraction(&products, 0.0, 800.0);
        assert_eq!(fraction, 1.0);

        let mut reveal = SectionReveal::new(0.1);
        reveal.observe_all(&[products], 0.0, 800.0, 0.0);
        assert!(reveal.is_revealed(Section::Products));
    }

    #[test]
    fn unmeasured_viewport_reveals_nothing() {
        let mut reveal = SectionReveal::new(0.1);
        reveal.observe_all(&[bounds(Section::About, 0.0, 300.0)], 0.0, 0.0, 0.0);
        assert!(!reveal.is_revealed(Section::About));
    }
}
