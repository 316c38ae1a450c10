//! Product detail modal: `Closed -> Open -> Closed`, with `open` re-entrant.

use crate::config::CONTACT;
use crate::data::Catalog;
use crate::domain::{Badge, Product, SpecRow};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Pre-filled contact message for a product.
pub fn contact_message(product_name: &str) -> String {
    format!(
        "{}{}{}",
        CONTACT.message_prefix, product_name, CONTACT.message_suffix
    )
}

/// Messaging deep link: `<base>?text=<percent-encoded message>`.
pub fn contact_link(product_name: &str) -> String {
    format!(
        "{}?text={}",
        CONTACT.whatsapp_base_url,
        urlencoding::encode(&contact_message(product_name))
    )
}

/// Content of an open modal. Built from scratch on every `open`, so nothing
/// (watermark included) carries over from the previously shown product.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailView {
    pub product_id: String,
    pub title: String,
    pub badge: Option<Badge>,
    pub category: String,
    pub description: String,
    pub images: Vec<String>,
    pub active_image: usize,
    pub watermark: Option<String>,
    pub specs: Vec<SpecRow>,
    pub applications: Vec<String>,
    pub contact_url: String,
    pub price: Option<f64>,
    pub previous_price: Option<f64>,
    pub power_rating: Option<String>,
}

impl DetailView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.name.clone(),
            badge: product.badge,
            category: product.category.clone(),
            description: product.short_description.clone(),
            images: product.images.clone(),
            active_image: 0,
            watermark: product.watermark_image.clone(),
            specs: product.specs.clone(),
            applications: product.applications.clone(),
            contact_url: contact_link(&product.name),
            price: product.price,
            previous_price: product.previous_price,
            power_rating: product.power_rating.clone(),
        }
    }

    pub fn primary_image(&self) -> &str {
        self.images
            .get(self.active_image)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// `(index, src, is_active)` for every image, in order.
    pub fn thumbnails(&self) -> impl Iterator<Item = (usize, &str, bool)> + '_ {
        self.images
            .iter()
            .enumerate()
            .map(move |(i, src)| (i, src.as_str(), i == self.active_image))
    }
}

/// What asked the modal to close. All of them lead to the same `close()`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    CancelKey,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailModal {
    #[default]
    Closed,
    Open(DetailView),
}

impl DetailModal {
    /// Shows the product with `id`, replacing whatever was on display.
    /// Unknown ids leave the modal untouched and return `false`.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> bool {
        let Some(product) = catalog.get(id) else {
            log::debug!("Detail requested for unknown product id '{}'", id);
            return false;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("[modal] open {}", product.id);
        }

        *self = DetailModal::Open(DetailView::from_product(product));
        true
    }

    /// Swaps the primary image; out-of-range indices and a closed modal are no-ops.
    pub fn select_image(&mut self, index: usize) -> bool {
        match self {
            DetailModal::Open(view) if index < view.images.len() => {
                view.active_image = index;
                true
            }
            _ => false,
        }
    }

    /// Returns whether the modal was open. Closing a closed modal is a no-op.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = DetailModal::Closed;
        was_open
    }

    pub fn close_via(&mut self, trigger: CloseTrigger) -> bool {
        let closed = self.close();
        #[cfg(debug_assertions)]
        if closed && DEBUG_FLAGS.print_ui_interactions {
            log::info!("[modal] closed via {}", trigger);
        }
        #[cfg(not(debug_assertions))]
        let _ = trigger;
        closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailModal::Open(_))
    }

    pub fn view(&self) -> Option<&DetailView> {
        match self {
            DetailModal::Open(view) => Some(view),
            DetailModal::Closed => None,
        }
    }

    /// Page scrolling is suspended while the modal is open.
    pub fn locks_page_scroll(&self) -> bool {
        self.is_open()
    }
}
