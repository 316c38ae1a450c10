// Domain types and value objects
pub mod product;
pub mod theme;

// Re-export commonly used types
pub use product::{Badge, Product, SpecRow};
pub use theme::Theme;
