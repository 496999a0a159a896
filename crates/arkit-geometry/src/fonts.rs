//! Font lookup for text geometry.

use std::collections::BTreeSet;

use arkit_config::schema::FontsConfig;

/// Resolves a requested font name to one the renderer can load.
///
/// A miss is never an error: text geometry falls back to the default font.
pub trait FontResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<String>;
}

/// Fixed set of installed fonts, matched by exact PostScript name.
#[derive(Debug, Clone, Default)]
pub struct FontCatalog {
    names: BTreeSet<String>,
}

impl FontCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &FontsConfig) -> Self {
        Self::new(config.available.iter().cloned())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FontResolver for FontCatalog {
    fn resolve(&self, name: &str) -> Option<String> {
        self.names.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_installed_font() {
        let catalog = FontCatalog::new(["Helvetica", "Menlo-Regular"]);
        assert_eq!(catalog.resolve("Helvetica").as_deref(), Some("Helvetica"));
    }

    #[test]
    fn unknown_font_resolves_to_none() {
        let catalog = FontCatalog::new(["Helvetica"]);
        assert_eq!(catalog.resolve("ComicSansMS"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = FontCatalog::new(["Helvetica"]);
        assert_eq!(catalog.resolve("helvetica"), None);
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = FontCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.resolve("Helvetica"), None);
    }

    #[test]
    fn from_config_uses_available_list() {
        let config = FontsConfig {
            available: vec!["Georgia".into(), "Georgia".into(), "Courier".into()],
        };
        let catalog = FontCatalog::from_config(&config);
        assert_eq!(catalog.len(), 2);
        assert!(catalog.resolve("Courier").is_some());
    }
}
