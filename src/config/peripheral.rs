//! Page chrome knobs (intro audio, navigation, mobile layout)

pub struct PeripheralConfig {
    /// Intro audio plays only while the page is scrolled less than this
    pub intro_scroll_threshold: f32,
    pub intro_volume: f64,
    /// Path of the intro clip, relative to the asset root
    pub intro_audio_src: &'static str,
    /// Added to the scroll offset when choosing the highlighted nav link
    pub nav_look_ahead: f32,
    /// Used when the hero section has not been measured yet
    pub default_hero_height: f32,
    /// Below this width the nav collapses into the hamburger menu
    pub mobile_breakpoint: f32,
    /// Share of a section that must be on screen before it fades in
    pub section_reveal_threshold: f32,
    pub section_reveal_secs: f32,
}

pub const PERIPHERAL: PeripheralConfig = PeripheralConfig {
    intro_scroll_threshold: 100.0,
    intro_volume: 0.7,
    intro_audio_src: "audio/intro.mp3",
    nav_look_ahead: 150.0,
    default_hero_height: 600.0,
    mobile_breakpoint: 720.0,
    section_reveal_threshold: 0.1,
    section_reveal_secs: 0.6,
};
