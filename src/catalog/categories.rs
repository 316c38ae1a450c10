use itertools::Itertools;

use crate::domain::Product;

/// Distinct non-empty categories, sorted ascending.
pub fn unique_categories<'a, I>(products: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .map(|p| p.category.as_str())
        .filter(|c| !c.is_empty())
        .unique()
        .sorted()
        .map(str::to_string)
        .collect()
}

/// Keeps the selected category when it survives a repopulation; otherwise
/// falls back to "all categories" (the empty selection).
pub fn reconcile_selection(current: &str, categories: &[String]) -> String {
    if categories.iter().any(|c| c == current) {
        current.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::fixtures::{product, reference_catalog};

    #[test]
    fn reference_categories_are_sorted_and_unique() {
        let catalog = reference_catalog();
        assert_eq!(
            unique_categories(catalog.products()),
            vec![
                "Line Array Activo",
                "Parlante 10\" Neodimio",
                "Woofer 18\" Alto Rendimiento",
                "Woofer 18\" Ferrita",
            ]
        );
    }

    #[test]
    fn duplicates_and_blanks_collapse() {
        let products = vec![
            product("1", "a", "Zeta", ""),
            product("2", "b", "", ""),
            product("3", "c", "Alfa", ""),
            product("4", "d", "Zeta", ""),
            product("5", "e", "alfa", ""),
        ];
        let categories = unique_categories(&products);
        assert_eq!(categories, vec!["Alfa", "Zeta", "alfa"]);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_catalog_has_no_categories() {
        assert!(unique_categories(&Vec::<Product>::new()).is_empty());
    }

    #[test]
    fn selection_survives_only_if_present() {
        let categories = vec!["Alfa".to_string(), "Zeta".to_string()];
        assert_eq!(reconcile_selection("Zeta", &categories), "Zeta");
        assert_eq!(reconcile_selection("Beta", &categories), "");
        assert_eq!(reconcile_selection("", &categories), "");
    }
}
