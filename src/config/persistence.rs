//! Persisted client state

/// Storage key for the theme preference (`"light"` | `"dark"`)
pub const THEME_KEY: &str = "paTheme";

/// Directory used by the native build for eframe's key-value storage
pub const APP_STATE_PATH: &str = ".pa_catalog_state";
