//! Maps catalog image and audio paths to URIs the egui loaders understand.

/// Relative paths are joined onto a base URI; absolute URIs pass through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetResolver {
    base: String,
}

impl AssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Native builds read assets from a local directory.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_dir(dir: &std::path::Path) -> Self {
        let dir = std::fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        Self::new(format!("file://{}", dir.display()))
    }

    /// Web builds resolve against the directory of the hosting page.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Self {
        let href = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default();
        Self::new(page_base(&href))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolve(&self, path: &str) -> String {
        if path.contains("://") || path.starts_with("data:") {
            return path.to_string();
        }
        let relative = path.trim_start_matches("./").trim_start_matches('/');
        if self.base.is_empty() {
            relative.to_string()
        } else {
            format!("{}/{}", self.base, relative)
        }
    }
}

/// Directory part of a page URL, without query or fragment.
pub fn page_base(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    let href = &href[..end];
    let scheme_end = href.find("://").map(|i| i + 3).unwrap_or(0);
    match href[scheme_end..].rfind('/') {
        Some(slash) => &href[..scheme_end + slash],
        None => href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_join_the_base() {
        let assets = AssetResolver::new("file:///srv/site/");
        assert_eq!(assets.base(), "file:///srv/site");
        assert_eq!(
            assets.resolve("img/hl30a-1.jpg"),
            "file:///srv/site/img/hl30a-1.jpg"
        );
        assert_eq!(
            assets.resolve("./img/logo.png"),
            "file:///srv/site/img/logo.png"
        );
        assert_eq!(
            assets.resolve("/audio/intro.mp3"),
            "file:///srv/site/audio/intro.mp3"
        );
    }

    #[test]
    fn absolute_uris_pass_through() {
        let assets = AssetResolver::new("https://example.com");
        let cdn = "https://cdn.example.com/a.png";
        assert_eq!(assets.resolve(cdn), cdn);
        assert_eq!(assets.resolve("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }

    #[test]
    fn empty_base_leaves_paths_relative() {
        let assets = AssetResolver::new("");
        assert_eq!(assets.resolve("img/a.jpg"), "img/a.jpg");
    }

    #[test]
    fn page_base_drops_document_and_query() {
        assert_eq!(
            page_base("https://pa.example.com/catalogo/index.html?x=1#productos"),
            "https://pa.example.com/catalogo"
        );
        assert_eq!(page_base("https://pa.example.com/"), "https://pa.example.com");
        assert_eq!(page_base("https://pa.example.com"), "https://pa.example.com");
    }
}
