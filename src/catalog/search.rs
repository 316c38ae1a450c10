//! Accent- and case-insensitive search text.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::Product;

/// Lowercases, decomposes (NFD) and drops combining marks, so "Línea" and
/// "linea" normalize to the same string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Searchable text of a product: name, category, short description, tags and
/// applications joined by single spaces, then normalized.
pub fn index_text(product: &Product) -> String {
    let tags = product.tags.join(" ");
    let applications = product.applications.join(" ");
    let joined = [
        product.name.as_str(),
        product.category.as_str(),
        product.short_description.as_str(),
        tags.as_str(),
        applications.as_str(),
    ]
    .join(" ");
    normalize(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::fixtures::product;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Línea"), "linea");
        assert_eq!(normalize("CAMIÓN Ñandú"), "camion nandu");
        assert_eq!(normalize("2×10″"), "2×10″");
    }

    #[test]
    fn index_covers_searchable_fields_in_order() {
        let mut p = product("x", "Módulo X", "Línea Activa", "Sistema de 2 vías");
        p.tags = vec!["2200 W".into(), "Clase D".into()];
        p.applications = vec!["Teatros".into()];
        p.specs = vec![("Peso".into(), "20 kg".into())];

        assert_eq!(
            index_text(&p),
            "modulo x linea activa sistema de 2 vias 2200 w clase d teatros"
        );
    }

    #[test]
    fn missing_optional_fields_leave_separators_only() {
        let p = product("x", "Solo", "", "");
        assert_eq!(index_text(&p), "solo    ");
    }
}
