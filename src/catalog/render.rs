//! Pure projection of a filtered product list into the catalog grid view model.

use crate::config::CATALOG;
use crate::domain::{Badge, Product};

/// Everything a card needs to be painted.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub badge: Option<Badge>,
    pub short_description: String,
    pub image: String,
    pub watermark: Option<String>,
    pub tags: Vec<String>,
    pub price: Option<f64>,
    pub previous_price: Option<f64>,
    pub power_rating: Option<String>,
    /// Presentation hint for the staggered entrance; no functional meaning.
    pub reveal_delay_secs: f32,
}

impl CardView {
    fn from_product(product: &Product, reveal_delay_secs: f32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            badge: product.badge,
            short_description: product.short_description.clone(),
            image: product.primary_image().to_string(),
            watermark: product.watermark_image.clone(),
            tags: product.tags.clone(),
            price: product.price,
            previous_price: product.previous_price,
            power_rating: product.power_rating.clone(),
            reveal_delay_secs,
        }
    }
}

/// Cards sharing one category, in catalog order.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    /// Every group but the first carries a visible header
    pub show_header: bool,
    pub cards: Vec<CardView>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogView {
    /// Nothing rendered yet
    #[default]
    Loading,
    /// Filters matched nothing
    Empty,
    Grid(Vec<CategoryGroup>),
}

impl CatalogView {
    pub fn card_count(&self) -> usize {
        match self {
            CatalogView::Grid(groups) => groups.iter().map(|g| g.cards.len()).sum(),
            _ => 0,
        }
    }

    /// Longest reveal delay in the grid, used to know when the entrance animation is over.
    pub fn last_reveal_delay(&self) -> f32 {
        match self {
            CatalogView::Grid(groups) => groups
                .iter()
                .flat_map(|g| g.cards.iter())
                .map(|c| c.reveal_delay_secs)
                .fold(0.0, f32::max),
            _ => 0.0,
        }
    }
}

/// Renders with the configured reveal stride.
pub fn render(products: &[&Product]) -> CatalogView {
    render_with_stride(products, CATALOG.reveal.stride_secs)
}

/// Groups by category in first-seen order; cards keep catalog order inside a
/// group. Card `n` (counting across groups) gets a reveal delay of `n * stride`.
pub fn render_with_stride(products: &[&Product], stride_secs: f32) -> CatalogView {
    if products.is_empty() {
        return CatalogView::Empty;
    }

    let mut groups: Vec<CategoryGroup> = Vec::new();
    for product in products {
        let position = match groups.iter().position(|g| g.category == product.category) {
            Some(position) => position,
            None => {
                groups.push(CategoryGroup {
                    category: product.category.clone(),
                    show_header: !groups.is_empty(),
                    cards: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[position]
            .cards
            .push(CardView::from_product(product, 0.0));
    }

    // Delays follow paint order, which is group order rather than catalog order
    for (index, card) in groups.iter_mut().flat_map(|g| g.cards.iter_mut()).enumerate() {
        card.reveal_delay_secs = index as f32 * stride_secs;
    }

    CatalogView::Grid(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::{CatalogQuery, filter};
    use crate::data::Catalog;
    use crate::data::catalog::fixtures::{product, reference_catalog};

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn empty_list_is_the_empty_state() {
        let view = render(&[]);
        assert_eq!(view, CatalogView::Empty);
        assert_eq!(view.card_count(), 0);
        assert_ne!(view, CatalogView::default());
    }

    #[test]
    fn reference_catalog_groups_in_first_seen_order() {
        let catalog = reference_catalog();
        let all = filter(catalog.products(), &CatalogQuery::default());
        let CatalogView::Grid(groups) = render(&all) else {
            panic!("expected a grid");
        };

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Line Array Activo",
                "Parlante 10\" Neodimio",
                "Woofer 18\" Alto Rendimiento",
                "Woofer 18\" Ferrita",
            ]
        );
        assert!(!groups[0].show_header);
        assert!(groups[1..].iter().all(|g| g.show_header));
        assert_eq!(groups[0].cards.len(), 2);
        assert_eq!(groups[0].cards[0].product_id, "hl30a");
    }

    #[test]
    fn interleaved_categories_keep_catalog_order_within_group() {
        let catalog = Catalog::new(vec![
            product("z1", "Zeta uno", "B", ""),
            product("a1", "Alfa uno", "A", ""),
            product("z2", "Zeta dos", "B", ""),
            product("a2", "Alfa dos", "A", ""),
        ])
        .unwrap();
        let all: Vec<&Product> = catalog.products().iter().collect();
        let CatalogView::Grid(groups) = render_with_stride(&all, 0.1) else {
            panic!("expected a grid");
        };

        assert_eq!(groups[0].category, "B");
        let b_ids: Vec<&str> = groups[0].cards.iter().map(|c| c.product_id.as_str()).collect();
        let a_ids: Vec<&str> = groups[1].cards.iter().map(|c| c.product_id.as_str()).collect();
        assert_eq!(b_ids, vec!["z1", "z2"]);
        assert_eq!(a_ids, vec!["a1", "a2"]);

        // Reveal delay follows paint order: z1, z2, a1, a2
        let delays: Vec<f32> = groups
            .iter()
            .flat_map(|g| g.cards.iter())
            .map(|c| c.reveal_delay_secs)
            .collect();
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert!(approx_eq(delays[3], 0.3));
    }

    #[test]
    fn cards_carry_display_fields() {
        let catalog = reference_catalog();
        let selected = filter(catalog.products(), &CatalogQuery::new("", "Parlante 10\" Neodimio"));
        let view = render(&selected);
        let CatalogView::Grid(groups) = &view else {
            panic!("expected a grid");
        };
        let card = &groups[0].cards[0];

        assert_eq!(card.name, "PA10N-900");
        assert_eq!(card.badge, Some(Badge::Pro));
        assert_eq!(card.image, "img/pa10n-1.jpg");
        assert_eq!(card.watermark.as_deref(), Some("img/pa10n-2.png"));
        assert_eq!(card.tags, vec!["1000 W", "99 dB", "10\"", "Neodimio"]);
        assert!(approx_eq(card.reveal_delay_secs, 0.0));
        assert_eq!(view.card_count(), 1);
    }

    #[test]
    fn default_stride_staggers_every_card() {
        let catalog = reference_catalog();
        let all: Vec<&Product> = catalog.products().iter().collect();
        let view = render(&all);
        assert_eq!(view.card_count(), 5);
        assert!(approx_eq(view.last_reveal_delay(), 4.0 * CATALOG.reveal.stride_secs));
    }
}
