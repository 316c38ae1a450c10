use crate::domain::Product;

/// One tile of the banner strip; clicking it opens the product's detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerItem {
    pub src: String,
    pub alt: String,
    pub product_id: String,
}

/// Every image of every product, in catalog order, with the whole sequence
/// repeated `repeat` times so the strip can scroll without a visible seam.
pub fn banner_items(products: &[Product], repeat: usize) -> Vec<BannerItem> {
    let items: Vec<BannerItem> = products
        .iter()
        .flat_map(|p| {
            p.images.iter().map(move |src| BannerItem {
                src: src.clone(),
                alt: p.name.clone(),
                product_id: p.id.clone(),
            })
        })
        .collect();

    items.iter().cycle().take(items.len() * repeat).cloned().collect()
}

/// Keeps the strip offset inside one pass over the tiles.
pub fn wrap_offset(offset: f32, pitch: f32, item_count: usize) -> f32 {
    let cycle = pitch * item_count as f32;
    if cycle <= 0.0 {
        return 0.0;
    }
    offset.rem_euclid(cycle)
}

/// Tiles needed to fill `viewport_width` when the strip is shifted left by
/// `offset`, as `(item index, x)` with `x` relative to the strip's left edge.
/// Items wrap around, so any offset and any viewport width is covered.
pub fn visible_tiles(
    offset: f32,
    pitch: f32,
    item_count: usize,
    viewport_width: f32,
) -> Vec<(usize, f32)> {
    if item_count == 0 || pitch <= 0.0 {
        return Vec::new();
    }
    let offset = wrap_offset(offset, pitch, item_count);
    let first = (offset / pitch).floor() as usize;

    let mut tiles = Vec::new();
    let mut index = first;
    let mut x = first as f32 * pitch - offset;
    while x < viewport_width {
        tiles.push((index % item_count, x));
        index += 1;
        x += pitch;
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::fixtures::{product, reference_catalog};

    #[test]
    fn strip_is_doubled_for_looping() {
        let catalog = reference_catalog();
        let items = banner_items(catalog.products(), 2);
        assert_eq!(items.len(), 10);
        assert_eq!(items[0], items[5]);
        assert_eq!(items[0].product_id, "hl30a");
        assert_eq!(items[0].alt, "PA HL-30A");
    }

    #[test]
    fn every_image_gets_a_tile() {
        let mut multi = product("m", "Multi", "X", "");
        multi.images = vec!["a.png".into(), "b.png".into(), "c.png".into()];
        let single = product("s", "Single", "X", "");
        let items = banner_items(&[multi, single], 1);

        let srcs: Vec<&str> = items.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["a.png", "b.png", "c.png", "img/s-1.png"]);
        assert!(items[..3].iter().all(|i| i.product_id == "m"));
    }

    #[test]
    fn empty_catalog_or_zero_repeat_gives_empty_strip() {
        assert!(banner_items(&[], 2).is_empty());
        assert!(banner_items(reference_catalog().products(), 0).is_empty());
    }

    #[test]
    fn offset_wraps_after_a_full_pass() {
        assert_eq!(wrap_offset(950.0, 100.0, 9), 50.0);
        assert_eq!(wrap_offset(900.0, 100.0, 9), 0.0);
        assert_eq!(wrap_offset(-10.0, 100.0, 9), 890.0);
        assert_eq!(wrap_offset(42.0, 100.0, 0), 0.0);
    }

    #[test]
    fn wide_viewport_is_always_covered() {
        // Ten 180 pt tiles with an 8 pt gap on a 1280 pt window
        let pitch = 188.0;
        for step in 0..200 {
            let offset = step as f32 * 17.3;
            let tiles = visible_tiles(offset, pitch, 10, 1280.0);

            let (_, first_x) = tiles[0];
            assert!(first_x <= 0.0 && first_x > -pitch, "offset {offset}");
            let (_, last_x) = tiles[tiles.len() - 1];
            assert!(last_x + pitch >= 1280.0, "offset {offset}");
            assert!(tiles.windows(2).all(|w| (w[1].1 - w[0].1 - pitch).abs() < 1e-3));
        }
    }

    #[test]
    fn strip_keeps_moving_past_the_old_clamp() {
        let pitch = 188.0;
        let at_600 = visible_tiles(600.0, pitch, 10, 1280.0);
        let at_800 = visible_tiles(800.0, pitch, 10, 1280.0);
        assert_ne!(at_600[0], at_800[0]);
        assert_eq!(at_800[0].0, 4);
        assert!((at_800[0].1 - (4.0 * pitch - 800.0)).abs() < 1e-3);
    }

    #[test]
    fn items_wrap_around_seamlessly() {
        let tiles = visible_tiles(180.0, 100.0, 3, 350.0);
        let indices: Vec<usize> = tiles.iter().map(|t| t.0).collect();
        assert_eq!(indices, vec![1, 2, 0, 1, 2]);
        assert_eq!(visible_tiles(300.0, 100.0, 3, 350.0), visible_tiles(0.0, 100.0, 3, 350.0));
    }

    #[test]
    fn nothing_to_lay_out() {
        assert!(visible_tiles(0.0, 100.0, 0, 500.0).is_empty());
        assert!(visible_tiles(0.0, 0.0, 4, 500.0).is_empty());
    }
}
