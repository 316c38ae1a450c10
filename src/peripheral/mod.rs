// Page chrome that lives outside the catalog engine
pub mod intro_audio;
pub mod nav;
pub mod reveal;

pub use intro_audio::{AudioCommand, AudioSink, IntroAudio, SilentSink, dispatch};
#[cfg(target_arch = "wasm32")]
pub use intro_audio::HtmlAudioSink;
pub use nav::{MobileMenu, NavHighlight, SearchBox, Section, SectionBounds};
pub use reveal::{SectionReveal, visible_fraction};
