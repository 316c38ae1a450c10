/// Every user-facing string of the site, in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub brand: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,

    pub nav_products: &'static str,
    pub nav_about: &'static str,
    pub nav_contact: &'static str,
    pub theme_to_light: &'static str,
    pub theme_to_dark: &'static str,
    pub menu_button: &'static str,

    pub catalog_heading: &'static str,
    pub search_trigger: &'static str,
    pub search_hint: &'static str,
    pub all_categories: &'static str,
    pub loading: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub card_hint: &'static str,
    pub card_cta: &'static str,

    pub modal_close: &'static str,
    pub modal_specs_heading: &'static str,
    pub modal_applications_heading: &'static str,
    pub modal_contact_cta: &'static str,
    pub previous_price_prefix: &'static str,

    pub about_heading: &'static str,
    pub about_body: &'static str,
    pub contact_heading: &'static str,
    pub contact_body: &'static str,
    pub footer: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "PA Acoustic - Audio Profesional",
    brand: "PA ACOUSTIC",
    hero_title: "Sonido profesional para cada escenario",
    hero_subtitle: "Line arrays activos, parlantes y woofers de alto rendimiento.",
    hero_cta: "Ver catálogo",

    nav_products: "Productos",
    nav_about: "Nosotros",
    nav_contact: "Contacto",
    theme_to_light: "☀",
    theme_to_dark: "🌙",
    menu_button: "☰",

    catalog_heading: "Catálogo",
    search_trigger: "🔍",
    search_hint: "Buscar productos…",
    all_categories: "Todas las categorías",
    loading: "Cargando catálogo…",
    empty_title: "No hay productos con los filtros seleccionados.",
    empty_hint: "Cambia la categoría o el texto de búsqueda.",
    card_hint: "Click para ver ficha",
    card_cta: "Ver más →",

    modal_close: "✕",
    modal_specs_heading: "Especificaciones",
    modal_applications_heading: "Aplicaciones",
    modal_contact_cta: "Consultar por WhatsApp",
    previous_price_prefix: "Antes",

    about_heading: "Nosotros",
    about_body: "Distribuimos equipos de audio profesional para conciertos, iglesias, teatros e instalaciones fijas.",
    contact_heading: "Contacto",
    contact_body: "Escríbenos por WhatsApp y te asesoramos con tu proyecto de sonido.",
    footer: "© PA Acoustic",
};
