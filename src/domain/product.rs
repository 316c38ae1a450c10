use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the specification table: (label, value), kept in display order.
pub type SpecRow = (String, String);

/// Short label overlaid on a product card.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Badge {
    #[serde(alias = "Top")]
    Top,
    #[serde(alias = "Nuevo", alias = "nuevo")]
    #[strum(to_string = "new", serialize = "nuevo")]
    New,
    #[serde(alias = "Pro")]
    Pro,
    #[serde(alias = "Oferta", alias = "oferta")]
    #[strum(to_string = "offer", serialize = "oferta")]
    Offer,
    #[serde(alias = "Popular")]
    Popular,
    #[serde(alias = "Agotado", alias = "agotado")]
    #[strum(to_string = "out-of-stock", serialize = "agotado")]
    OutOfStock,
}

impl Badge {
    /// Text painted on the card and in the modal.
    pub fn label(&self) -> &'static str {
        match self {
            Badge::Top => "Top",
            Badge::New => "Nuevo",
            Badge::Pro => "Pro",
            Badge::Offer => "Oferta",
            Badge::Popular => "Popular",
            Badge::OutOfStock => "Agotado",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A catalog entry. Loaded once at startup and never mutated afterwards.
///
/// Field aliases accept the Spanish site schema (`nombre`, `cat`, `desc`,
/// `imgs`, `watermark`, `apps`) as well as the English one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(alias = "nombre")]
    pub name: String,
    #[serde(default, alias = "cat")]
    pub category: String,
    #[serde(default)]
    pub badge: Option<Badge>,
    #[serde(default, alias = "desc")]
    pub short_description: String,
    #[serde(alias = "imgs")]
    pub images: Vec<String>,
    #[serde(default, alias = "watermark")]
    pub watermark_image: Option<String>,
    #[serde(default)]
    pub specs: Vec<SpecRow>,
    #[serde(default, alias = "apps")]
    pub applications: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    // Commerce fields, presentation only
    #[serde(default, alias = "precio")]
    pub price: Option<f64>,
    #[serde(default, alias = "precioAnterior", alias = "previousPrice")]
    pub previous_price: Option<f64>,
    #[serde(default, alias = "potencia", alias = "powerRating")]
    pub power_rating: Option<String>,
}

/// Catalog files written by hand use either `"id": "hl30a"` or `"id": 3`.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

impl Product {
    /// Default image; validated non-empty when the catalog is built.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn spanish_schema_deserializes() {
        let json = r#"{
            "id": "pa10n",
            "nombre": "PA10N-900",
            "cat": "Parlante 10\" Neodimio",
            "badge": "Pro",
            "desc": "Altavoz profesional",
            "imgs": ["img/pa10n-1.jpg"],
            "watermark": "img/pa10n-2.png",
            "specs": [["Modelo", "PA10N-900"], ["Bobina", "3 pulgadas"]],
            "apps": ["Car audio"],
            "tags": ["10\""]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "PA10N-900");
        assert_eq!(product.category, "Parlante 10\" Neodimio");
        assert_eq!(product.badge, Some(Badge::Pro));
        assert_eq!(product.watermark_image.as_deref(), Some("img/pa10n-2.png"));
        assert_eq!(product.specs[1], ("Bobina".to_string(), "3 pulgadas".to_string()));
        assert_eq!(product.applications, vec!["Car audio".to_string()]);
        assert_eq!(product.primary_image(), "img/pa10n-1.jpg");
        assert!(product.price.is_none());
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let json = r#"{ "id": 7, "name": "Mixer", "images": ["a.png"], "price": 1250000 }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "7");
        assert!(product.category.is_empty());
        assert!(product.badge.is_none());
        assert!(product.tags.is_empty());
        assert_eq!(product.price, Some(1_250_000.0));
    }

    #[test]
    fn badge_parses_both_vocabularies() {
        assert_eq!(Badge::from_str("nuevo").unwrap(), Badge::New);
        assert_eq!(Badge::from_str("new").unwrap(), Badge::New);
        assert_eq!(Badge::from_str("out-of-stock").unwrap(), Badge::OutOfStock);
        assert_eq!(Badge::OutOfStock.as_ref(), "out-of-stock");
        assert_eq!(Badge::New.to_string(), "Nuevo");
    }
}
