//! The catalog engine: search, filter, category registry, grid and detail
//! view models. Nothing in here depends on the UI toolkit.

pub mod banner;
pub mod categories;
pub mod detail;
pub mod filter;
pub mod render;
pub mod search;

pub use banner::{BannerItem, banner_items, visible_tiles, wrap_offset};
pub use categories::{reconcile_selection, unique_categories};
pub use detail::{CloseTrigger, DetailModal, DetailView, contact_link};
pub use filter::{CatalogQuery, filter};
pub use render::{CardView, CatalogView, CategoryGroup, render};
pub use search::{index_text, normalize};
