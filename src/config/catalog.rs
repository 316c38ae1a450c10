//! Catalog presentation configuration

/// Staggered entrance of product cards
pub struct RevealConfig {
    /// Delay added per subsequent card (seconds)
    pub stride_secs: f32,
    /// Fade-in duration of a single card (seconds)
    pub duration_secs: f32,
}

/// Banner carousel at the top of the page
pub struct BannerConfig {
    /// How many times the image sequence is repeated so the strip can loop
    pub repeat: usize,
    /// Horizontal drift of the strip (points per second)
    pub scroll_speed: f32,
    /// Height of one banner tile
    pub item_height: f32,
    /// Space between tiles
    pub gap: f32,
}

/// The Master Catalog Configuration
pub struct CatalogConfig {
    pub card_width: f32,
    pub card_image_height: f32,
    pub modal_image_height: f32,
    pub thumbnail_size: f32,

    // Sub-groups
    pub reveal: RevealConfig,
    pub banner: BannerConfig,
}

pub const CATALOG: CatalogConfig = CatalogConfig {
    card_width: 260.0,
    card_image_height: 180.0,
    modal_image_height: 320.0,
    thumbnail_size: 56.0,

    reveal: RevealConfig {
        stride_secs: 0.07,
        duration_secs: 0.6,
    },

    banner: BannerConfig {
        repeat: 2,
        scroll_speed: 40.0,
        item_height: 120.0,
        gap: 8.0,
    },
};
