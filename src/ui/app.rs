use eframe::{Frame, egui};

use crate::catalog::{
    BannerItem, CatalogQuery, CatalogView, CloseTrigger, DetailModal, banner_items, filter,
    reconcile_selection, render, unique_categories,
};
use crate::config::{CATALOG, PERIPHERAL, THEME_KEY};
use crate::data::Catalog;
use crate::domain::Theme;
use crate::peripheral::{
    AudioCommand, AudioSink, IntroAudio, MobileMenu, NavHighlight, SearchBox, Section,
    SectionBounds, SectionReveal, dispatch,
};
use crate::ui::assets::AssetResolver;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Page scroll state measured during the last frame
#[derive(Default)]
pub(super) struct PageLayout {
    pub scroll_y: f32,
    pub viewport_height: f32,
    pub hero_height: f32,
    pub sections: Vec<SectionBounds>,
    pub pending_scroll: Option<Section>,
}

impl PageLayout {
    pub fn offset_of(&self, section: Section) -> Option<f32> {
        match section {
            Section::Hero => Some(0.0),
            _ => self
                .sections
                .iter()
                .find(|b| b.section == section)
                .map(|b| b.top),
        }
    }
}

pub struct CatalogApp {
    pub(super) catalog: Catalog,
    pub(super) assets: AssetResolver,
    pub(super) theme: Theme,

    pub(super) query: CatalogQuery,
    pub(super) categories: Vec<String>,
    pub(super) view: CatalogView,
    pub(super) rendered_at: AppInstant,
    pub(super) modal: DetailModal,
    pub(super) banner: Vec<BannerItem>,
    pub(super) banner_offset: f32,

    pub(super) nav: NavHighlight,
    pub(super) mobile_menu: MobileMenu,
    pub(super) search_box: SearchBox,
    pub(super) focus_search: bool,
    pub(super) layout: PageLayout,
    pub(super) section_reveal: SectionReveal,
    pub(super) started_at: AppInstant,

    intro_audio: IntroAudio,
    audio_sink: Box<dyn AudioSink>,
}

impl CatalogApp {
    pub fn new(cc: &eframe::CreationContext<'_>, catalog: Catalog, assets: AssetResolver) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let stored_theme = cc.storage.and_then(|storage| storage.get_string(THEME_KEY));
        let theme = Theme::from_stored(stored_theme.as_deref());
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("Stored theme {:?} -> {}", stored_theme, theme);
        }
        setup_custom_visuals(&cc.egui_ctx, theme);

        let audio_sink = Self::create_audio_sink(&assets);
        let banner = banner_items(catalog.products(), CATALOG.banner.repeat);

        let mut app = Self {
            catalog,
            assets,
            theme,
            query: CatalogQuery::default(),
            categories: Vec::new(),
            view: CatalogView::Loading,
            rendered_at: now(),
            modal: DetailModal::default(),
            banner,
            banner_offset: 0.0,
            nav: NavHighlight::default(),
            mobile_menu: MobileMenu::default(),
            search_box: SearchBox::default(),
            focus_search: false,
            layout: PageLayout {
                hero_height: PERIPHERAL.default_hero_height,
                ..Default::default()
            },
            section_reveal: SectionReveal::new(PERIPHERAL.section_reveal_threshold),
            started_at: now(),
            intro_audio: IntroAudio::new(PERIPHERAL.intro_scroll_threshold),
            audio_sink,
        };

        app.apply_filter();
        let command = app.intro_audio.on_load(0.0);
        app.run_audio(command);
        app
    }

    #[cfg(target_arch = "wasm32")]
    fn create_audio_sink(assets: &AssetResolver) -> Box<dyn AudioSink> {
        let src = assets.resolve(PERIPHERAL.intro_audio_src);
        Box::new(crate::peripheral::HtmlAudioSink::new(&src))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn create_audio_sink(_assets: &AssetResolver) -> Box<dyn AudioSink> {
        Box::new(crate::peripheral::SilentSink)
    }

    /// Recomputes categories, reconciles the selection and re-renders the grid.
    pub(super) fn apply_filter(&mut self) {
        self.categories = unique_categories(self.catalog.products());
        self.query.category = reconcile_selection(&self.query.category, &self.categories);

        let matches = filter(self.catalog.products(), &self.query);
        self.view = render(&matches);
        self.rendered_at = now();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_catalog_renders {
            log::info!(
                "Rendered {} of {} products for {:?}",
                self.view.card_count(),
                self.catalog.len(),
                self.query
            );
        }
    }

    pub(super) fn set_search_text(&mut self, text: String) {
        if self.query.text != text {
            self.query.text = text;
            self.apply_filter();
        }
    }

    pub(super) fn set_category(&mut self, category: String) {
        if self.query.category != category {
            self.query.category = category;
            self.apply_filter();
        }
    }

    pub(super) fn open_detail(&mut self, product_id: &str) {
        self.modal.open(&self.catalog, product_id);
    }

    pub(super) fn close_detail(&mut self, trigger: CloseTrigger) {
        self.modal.close_via(trigger);
    }

    /// Flips the theme and writes the preference straight away.
    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.theme = self.theme.toggled();
        setup_custom_visuals(ctx, self.theme);
        if let Some(storage) = frame.storage_mut() {
            storage.set_string(THEME_KEY, self.theme.to_string());
            storage.flush();
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Theme switched to {}", self.theme);
        }
    }

    pub(super) fn scroll_to(&mut self, section: Section) {
        if section == Section::Hero {
            self.nav.clear();
        }
        self.layout.pending_scroll = Some(section);
        self.mobile_menu.close();
    }

    /// Feeds the latest page scroll position to the nav highlight and the intro clip.
    pub(super) fn on_page_scrolled(&mut self, scroll_y: f32) {
        let moved = (scroll_y - self.layout.scroll_y).abs() > f32::EPSILON;
        self.layout.scroll_y = scroll_y;

        self.nav.update(
            scroll_y,
            PERIPHERAL.nav_look_ahead,
            self.layout.hero_height,
            &self.layout.sections,
        );

        if moved {
            let command = self.intro_audio.on_scroll(scroll_y);
            self.run_audio(command);
        }
    }

    pub(super) fn on_pointer_click(&mut self) {
        let command = self.intro_audio.on_click(self.layout.scroll_y);
        self.run_audio(command);
    }

    fn run_audio(&mut self, command: Option<AudioCommand>) {
        dispatch(command, self.audio_sink.as_mut(), PERIPHERAL.intro_volume);
    }

    fn poll_audio(&mut self) {
        if self.audio_sink.take_blocked() {
            self.intro_audio.on_play_blocked();
        }
    }
}

impl eframe::App for CatalogApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.run_audio(Some(AudioCommand::Stop));

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage.set_string(THEME_KEY, self.theme.to_string());
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.poll_audio();
        if ctx.input(|i| i.pointer.any_click()) {
            self.on_pointer_click();
        }

        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx, frame);
        self.render_central_panel(ctx);
        self.render_detail_modal(ctx);
    }
}
