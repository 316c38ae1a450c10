//! Configuration module for the catalog application.

pub mod catalog;
pub mod contact;

mod debug; // Private: use crate::config::DEBUG_FLAGS rather than crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod peripheral;
pub mod persistence;

// Re-export commonly used items
pub use catalog::CATALOG;
pub use contact::CONTACT;
pub use peripheral::PERIPHERAL;
pub use persistence::{APP_STATE_PATH, THEME_KEY};
