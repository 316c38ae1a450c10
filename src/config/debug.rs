//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every use site is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (filter changes, modal open/close, theme toggles).
    pub print_ui_interactions: bool,
    /// Emit a line every time the catalog grid view model is rebuilt.
    pub print_catalog_renders: bool,
    /// Emit details of persisted state reads/writes.
    pub print_state_serde: bool,
    /// Emit intro audio state transitions.
    pub print_audio_events: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_catalog_renders: false,
    print_state_serde: false,
    print_audio_events: false,
    print_shutdown: false,
};
