use eframe::egui::{
    Align, Button, CentralPanel, Color32, Context, CornerRadius, CursorIcon, Frame, Grid,
    Hyperlink, Id, Image, Key, Layout, Margin, Modal, Rect, RichText, ScrollArea, Sense, Spinner,
    Stroke, TopBottomPanel, Ui, UiBuilder, Vec2, vec2,
};

use crate::catalog::{CardView, CatalogView, CloseTrigger, DetailView, visible_tiles, wrap_offset};
use crate::config::{CATALOG, CONTACT, PERIPHERAL};
use crate::peripheral::{Section, SectionBounds};
use crate::ui::app::CatalogApp;
use crate::ui::assets::AssetResolver;
use crate::ui::config::{UI_CONFIG, UI_TEXT, UiPalette};
use crate::ui::styles::{UiStyleExt, paint_badge, struck};
use crate::ui::ui_panels::{FilterEvent, FilterPanel, NavBar, NavEvent, Panel};
use crate::ui::utils::{bullet_item, format_price, section_heading, spaced_separator};
use crate::utils::app_time::{reveal_alpha, secs_since};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Requests raised while painting the page, applied once painting is done
enum PageAction {
    Filter(FilterEvent),
    OpenDetail(String),
    BannerClicked(String),
    Goto(Section),
}

impl CatalogApp {
    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if self.modal.is_open() || ctx.wants_keyboard_input() {
            return;
        }
        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.search_box.collapse();
                self.mobile_menu.close();
            }
            if i.modifiers.command && i.key_pressed(Key::F) && !self.search_box.is_expanded() {
                self.search_box.toggle();
                self.focus_search = true;
            }
        });
    }

    pub(super) fn render_top_panel(&mut self, ctx: &Context, frame: &mut eframe::Frame) {
        let narrow = ctx.screen_rect().width() < PERIPHERAL.mobile_breakpoint;
        if !narrow {
            self.mobile_menu.close();
        }
        let palette = UI_CONFIG.palette(self.theme);

        let events = TopBottomPanel::top("nav_bar")
            .exact_height(if narrow && self.mobile_menu.is_open() {
                UI_CONFIG.nav_height * 2.5
            } else {
                UI_CONFIG.nav_height
            })
            .frame(
                Frame::new()
                    .fill(palette.panel)
                    .inner_margin(Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                let mut nav_bar = NavBar::new(
                    self.theme,
                    self.nav.active(),
                    narrow,
                    self.mobile_menu.is_open(),
                );
                nav_bar.render(ui)
            })
            .inner;

        for event in events {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Nav event: {:?}", event);
            }
            match event {
                NavEvent::Logo => self.scroll_to(Section::Hero),
                NavEvent::Goto(section) => self.scroll_to(section),
                NavEvent::ToggleTheme => self.toggle_theme(ctx, frame),
                NavEvent::ToggleMenu => {
                    self.mobile_menu.toggle();
                }
            }
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let mut actions = Vec::new();

        let mut page = ScrollArea::vertical()
            .id_salt("page")
            .auto_shrink([false, false])
            .enable_scrolling(!self.modal.locks_page_scroll());
        if let Some(section) = self.layout.pending_scroll.take() {
            if let Some(offset) = self.layout.offset_of(section) {
                page = page.vertical_scroll_offset(offset);
            }
        }

        let now_secs = secs_since(self.started_at);
        self.section_reveal.observe_all(
            &self.layout.sections,
            self.layout.scroll_y,
            self.layout.viewport_height,
            now_secs,
        );

        let output = CentralPanel::default()
            .show(ctx, |ui| {
                page.show(ui, |ui| {
                    let origin = ui.min_rect().top();
                    let mut sections = Vec::new();

                    self.render_hero(ui, &mut actions);
                    let hero_height = ui.cursor().top() - origin;

                    for section in Section::LINKED {
                        let top = ui.cursor().top() - origin;
                        let opacity = self.section_reveal.opacity(
                            section,
                            now_secs,
                            PERIPHERAL.section_reveal_secs,
                        );
                        ui.scope(|ui| {
                            ui.multiply_opacity(opacity);
                            match section {
                                Section::Products => self.render_products(ui, &mut actions),
                                Section::About => self.render_about(ui),
                                Section::Contact => self.render_contact(ui),
                                Section::Hero => {}
                            }
                        });
                        let height = ui.cursor().top() - origin - top;
                        sections.push(SectionBounds {
                            section,
                            top,
                            height,
                        });
                    }

                    spaced_separator(ui);
                    ui.vertical_centered(|ui| {
                        ui.label_subdued(UI_TEXT.footer, UI_CONFIG.palette(self.theme));
                    });
                    ui.add_space(16.0);

                    (hero_height, sections)
                })
            })
            .inner;

        let (hero_height, sections) = output.inner;
        let first_measure = self.layout.viewport_height <= 0.0;
        self.layout.hero_height = hero_height;
        self.layout.sections = sections;
        self.layout.viewport_height = output.inner_rect.height();
        self.on_page_scrolled(output.state.offset.y);

        if first_measure
            || self
                .section_reveal
                .is_animating(now_secs, PERIPHERAL.section_reveal_secs)
        {
            ctx.request_repaint();
        }

        for action in actions {
            match action {
                PageAction::Filter(event) => self.apply_filter_event(event),
                PageAction::OpenDetail(id) => self.open_detail(&id),
                PageAction::BannerClicked(id) => {
                    self.scroll_to(Section::Products);
                    self.open_detail(&id);
                }
                PageAction::Goto(section) => self.scroll_to(section),
            }
        }
    }

    fn apply_filter_event(&mut self, event: FilterEvent) {
        match event {
            FilterEvent::TextChanged(text) => self.set_search_text(text),
            FilterEvent::CategoryChanged(category) => self.set_category(category),
            FilterEvent::SearchToggled => {
                self.focus_search = self.search_box.toggle();
            }
            FilterEvent::SearchCollapsed => self.search_box.collapse(),
        }
    }

    fn render_hero(&mut self, ui: &mut Ui, actions: &mut Vec<PageAction>) {
        let palette = UI_CONFIG.palette(self.theme);
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(UI_TEXT.hero_title)
                    .size(34.0)
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(UI_TEXT.hero_subtitle).size(18.0).color(palette.muted));
            ui.add_space(16.0);
            let cta = Button::new(RichText::new(UI_TEXT.hero_cta).strong().color(palette.badge_text))
                .fill(palette.accent)
                .corner_radius(CornerRadius::same(20));
            if ui.add(cta).clicked() {
                actions.push(PageAction::Goto(Section::Products));
            }
        });
        ui.add_space(32.0);
        self.render_banner(ui, actions);
        ui.add_space(24.0);
    }

    /// Endless strip of product images. Tiles are placed by hand from the
    /// wrapped offset, so the strip keeps moving at any window width.
    fn render_banner(&mut self, ui: &mut Ui, actions: &mut Vec<PageAction>) {
        if self.banner.is_empty() {
            return;
        }
        let height = CATALOG.banner.item_height;
        let tile_size = vec2(height * 1.5, height);
        let pitch = tile_size.x + CATALOG.banner.gap;
        let dt = ui.input(|i| i.stable_dt).min(0.1);

        let (strip, _) = ui.allocate_exact_size(vec2(ui.available_width(), height), Sense::hover());
        let mut tiles_ui = ui.new_child(UiBuilder::new().max_rect(strip));
        tiles_ui.set_clip_rect(strip.intersect(ui.clip_rect()));

        for (index, x) in visible_tiles(self.banner_offset, pitch, self.banner.len(), strip.width()) {
            let item = &self.banner[index];
            let rect = Rect::from_min_size(strip.min + vec2(x, 0.0), tile_size);
            let image = Image::new(self.assets.resolve(&item.src))
                .fit_to_exact_size(tile_size)
                .corner_radius(CornerRadius::same(8));
            let response = tiles_ui
                .put(rect, Button::image(image).frame(false))
                .on_hover_text(&item.alt)
                .on_hover_cursor(CursorIcon::PointingHand);
            if response.clicked() {
                actions.push(PageAction::BannerClicked(item.product_id.clone()));
            }
        }

        self.banner_offset = wrap_offset(
            self.banner_offset + CATALOG.banner.scroll_speed * dt,
            pitch,
            self.banner.len(),
        );
        ui.ctx().request_repaint();
    }

    fn render_products(&mut self, ui: &mut Ui, actions: &mut Vec<PageAction>) {
        section_heading(ui, UI_TEXT.catalog_heading, self.theme);

        let mut filter_panel = FilterPanel::new(
            &self.query,
            &self.categories,
            self.search_box.is_expanded(),
            self.focus_search,
        );
        actions.extend(filter_panel.render(ui).into_iter().map(PageAction::Filter));
        self.focus_search = false;
        ui.add_space(16.0);

        let palette = UI_CONFIG.palette(self.theme);
        let elapsed = secs_since(self.rendered_at);

        match &self.view {
            CatalogView::Loading => {
                ui.horizontal(|ui| {
                    ui.add(Spinner::new());
                    ui.label_subdued(UI_TEXT.loading, palette);
                });
            }
            CatalogView::Empty => {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(RichText::new(UI_TEXT.empty_title).strong().color(palette.text));
                    ui.label_subdued(UI_TEXT.empty_hint, palette);
                    ui.add_space(24.0);
                });
            }
            CatalogView::Grid(groups) => {
                for group in groups {
                    if group.show_header {
                        section_heading(ui, &group.category, self.theme);
                    }
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = vec2(16.0, 16.0);
                        for card in &group.cards {
                            if render_card(ui, card, &self.assets, palette, elapsed) {
                                actions.push(PageAction::OpenDetail(card.product_id.clone()));
                            }
                        }
                    });
                }
            }
        }

        if elapsed < self.view.last_reveal_delay() + CATALOG.reveal.duration_secs {
            ui.ctx().request_repaint();
        }
    }

    fn render_about(&self, ui: &mut Ui) {
        let palette = UI_CONFIG.palette(self.theme);
        section_heading(ui, UI_TEXT.about_heading, self.theme);
        ui.label(RichText::new(UI_TEXT.about_body).color(palette.text));
        ui.add_space(24.0);
    }

    fn render_contact(&self, ui: &mut Ui) {
        let palette = UI_CONFIG.palette(self.theme);
        section_heading(ui, UI_TEXT.contact_heading, self.theme);
        ui.label(RichText::new(UI_TEXT.contact_body).color(palette.text));
        ui.add_space(8.0);
        ui.add(
            Hyperlink::from_label_and_url(
                RichText::new(UI_TEXT.modal_contact_cta)
                    .strong()
                    .color(palette.contact),
                CONTACT.whatsapp_base_url,
            )
            .open_in_new_tab(true),
        );
        ui.add_space(24.0);
    }

    pub(super) fn render_detail_modal(&mut self, ctx: &Context) {
        let Some(view) = self.modal.view() else {
            return;
        };
        let palette = UI_CONFIG.palette(self.theme);
        let max_height = ctx.screen_rect().height() * 0.85;
        let assets = &self.assets;

        let mut selected_image = None;
        let mut close_clicked = false;

        let response = Modal::new(Id::new("product_detail")).show(ctx, |ui| {
            ui.set_max_width(780.0);

            ui.horizontal(|ui| {
                if let Some(badge) = view.badge {
                    ui.badge(badge.label(), palette);
                }
                ui.heading(RichText::new(&view.title).strong().color(palette.text));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(UI_TEXT.modal_close).clicked() {
                        close_clicked = true;
                    }
                });
            });
            ui.label_subdued(&view.category, palette);
            ui.add_space(8.0);

            ScrollArea::vertical()
                .id_salt("detail_body")
                .max_height(max_height)
                .show(ui, |ui| {
                    if ui.available_width() >= 600.0 {
                        ui.columns(2, |columns| {
                            render_detail_gallery(&mut columns[0], view, assets, &mut selected_image);
                            render_detail_info(&mut columns[1], view, palette);
                        });
                    } else {
                        render_detail_gallery(ui, view, assets, &mut selected_image);
                        ui.add_space(12.0);
                        render_detail_info(ui, view, palette);
                    }
                });
        });

        if let Some(index) = selected_image {
            self.modal.select_image(index);
        }

        if close_clicked {
            self.close_detail(CloseTrigger::Button);
        } else if response.should_close() {
            let trigger = if ctx.input(|i| i.key_pressed(Key::Escape)) {
                CloseTrigger::CancelKey
            } else {
                CloseTrigger::Backdrop
            };
            self.close_detail(trigger);
        }
    }
}

/// Draws one product card. Returns true when it was clicked.
fn render_card(
    ui: &mut Ui,
    card: &CardView,
    assets: &AssetResolver,
    palette: &UiPalette,
    elapsed: f32,
) -> bool {
    let alpha = reveal_alpha(elapsed, card.reveal_delay_secs, CATALOG.reveal.duration_secs);

    let response = ui
        .scope(|ui| {
            ui.multiply_opacity(alpha);
            Frame::new()
                .fill(palette.card)
                .stroke(Stroke::new(1.0, palette.card_border))
                .corner_radius(CornerRadius::same(12))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(CATALOG.card_width);
                    ui.vertical(|ui| {
                        let image_size = vec2(CATALOG.card_width, CATALOG.card_image_height);
                        let image = ui.add(
                            Image::new(assets.resolve(&card.image))
                                .fit_to_exact_size(image_size)
                                .corner_radius(CornerRadius::same(8)),
                        );
                        if let Some(watermark) = &card.watermark {
                            paint_watermark(ui, assets, watermark, image.rect);
                        }
                        if let Some(badge) = card.badge {
                            paint_badge(ui.painter(), image.rect.min + vec2(8.0, 8.0), badge.label(), palette);
                        }

                        ui.add_space(8.0);
                        ui.label_subdued(&card.category, palette);
                        ui.label(RichText::new(&card.name).strong().size(16.0).color(palette.text));
                        ui.label(RichText::new(&card.short_description).color(palette.muted));
                        if let Some(power) = &card.power_rating {
                            ui.label(RichText::new(power).small().strong().color(palette.text));
                        }
                        render_price(ui, card.price, card.previous_price, palette);

                        if !card.tags.is_empty() {
                            ui.horizontal_wrapped(|ui| {
                                for tag in &card.tags {
                                    ui.pill(tag, palette);
                                }
                            });
                        }

                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            ui.label_subdued(UI_TEXT.card_hint, palette);
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(RichText::new(UI_TEXT.card_cta).strong().color(palette.accent));
                            });
                        });
                    });
                })
                .response
        })
        .inner;

    response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}

fn render_price(ui: &mut Ui, price: Option<f64>, previous: Option<f64>, palette: &UiPalette) {
    let Some(price) = price else {
        return;
    };
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format_price(price))
                .strong()
                .size(16.0)
                .color(palette.accent),
        );
        if let Some(previous) = previous {
            let text = format!("{} {}", UI_TEXT.previous_price_prefix, format_price(previous));
            ui.label(struck(text, palette.muted));
        }
    });
}

/// Logo stamped in the bottom-right corner of a product image.
fn paint_watermark(ui: &Ui, assets: &AssetResolver, watermark: &str, image_rect: Rect) {
    let side = image_rect.width().min(image_rect.height()) * 0.25;
    let max = image_rect.right_bottom() - vec2(8.0, 8.0);
    let rect = Rect::from_min_max(max - Vec2::splat(side), max);
    Image::new(assets.resolve(watermark))
        .tint(Color32::from_white_alpha(170))
        .paint_at(ui, rect);
}

fn render_detail_gallery(
    ui: &mut Ui,
    view: &DetailView,
    assets: &AssetResolver,
    selected: &mut Option<usize>,
) {
    let size = vec2(ui.available_width(), CATALOG.modal_image_height);
    let image = ui.add(
        Image::new(assets.resolve(view.primary_image()))
            .fit_to_exact_size(size)
            .corner_radius(CornerRadius::same(8)),
    );
    if let Some(watermark) = &view.watermark {
        paint_watermark(ui, assets, watermark, image.rect);
    }

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for (index, src, active) in view.thumbnails() {
            let thumb = Image::new(assets.resolve(src))
                .fit_to_exact_size(Vec2::splat(CATALOG.thumbnail_size));
            if ui.add(Button::image(thumb).selected(active)).clicked() {
                *selected = Some(index);
            }
        }
    });
}

fn render_detail_info(ui: &mut Ui, view: &DetailView, palette: &UiPalette) {
    ui.label(RichText::new(&view.description).color(palette.text));
    if let Some(power) = &view.power_rating {
        ui.add_space(4.0);
        ui.label(RichText::new(power).strong().color(palette.text));
    }
    render_price(ui, view.price, view.previous_price, palette);

    if !view.specs.is_empty() {
        spaced_separator(ui);
        ui.label(RichText::new(UI_TEXT.modal_specs_heading).strong().color(palette.heading));
        Grid::new("detail_specs")
            .num_columns(2)
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                for (key, value) in &view.specs {
                    ui.label(RichText::new(key).color(palette.muted));
                    ui.label(RichText::new(value).color(palette.text));
                    ui.end_row();
                }
            });
    }

    if !view.applications.is_empty() {
        spaced_separator(ui);
        ui.label(
            RichText::new(UI_TEXT.modal_applications_heading)
                .strong()
                .color(palette.heading),
        );
        for application in &view.applications {
            ui.label(RichText::new(bullet_item(application)).color(palette.text));
        }
    }

    ui.add_space(16.0);
    ui.add(
        Hyperlink::from_label_and_url(
            RichText::new(UI_TEXT.modal_contact_cta)
                .strong()
                .color(palette.contact),
            &view.contact_url,
        )
        .open_in_new_tab(true),
    );
}
