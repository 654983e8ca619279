//! Keyword based sheet classification

use super::{Advisory, SheetRule};
use crate::reader::SheetSample;

/// Fires when any header contains one of its keywords, ignoring case
pub struct KeywordRule {
    id: String,
    name: String,
    advisory: Advisory,
    keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        advisory: Advisory,
        keywords: &[String],
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            advisory,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword found in the given lower-case header
    fn matching_keyword(&self, header: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| !k.is_empty() && header.contains(k.as_str()))
            .map(|k| k.as_str())
    }
}

impl SheetRule for KeywordRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, sheet: &SheetSample) -> Option<Advisory> {
        for header in sheet.lowercase_columns() {
            if let Some(keyword) = self.matching_keyword(&header) {
                tracing::debug!(
                    rule = self.id(),
                    name = self.name(),
                    sheet = %sheet.name,
                    header = %header,
                    keyword,
                    "keyword matched"
                );
                return Some(self.advisory);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn financial_rule() -> KeywordRule {
        let keywords: Vec<String> = ["precio", "price", "monto", "total", "costo"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        KeywordRule::new("FIN001", "Financial data", Advisory::Financial, &keywords)
    }

    fn sheet(columns: &[&str]) -> SheetSample {
        SheetSample::new("Hoja1", columns.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let rule = financial_rule();
        for header in ["Precio Unitario", "PRECIO", "precio", "Precio"] {
            assert_eq!(
                rule.check(&sheet(&["Producto", header])),
                Some(Advisory::Financial),
                "header {header} should match"
            );
        }
    }

    #[test]
    fn test_fires_once_for_many_matches() {
        let rule = financial_rule();
        assert_eq!(
            rule.check(&sheet(&["Precio", "Total", "Monto"])),
            Some(Advisory::Financial)
        );
    }

    #[test]
    fn test_no_match() {
        let rule = financial_rule();
        assert_eq!(rule.check(&sheet(&["Nombre", "Fecha", "Descripcion"])), None);
        assert_eq!(rule.check(&sheet(&[])), None);
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let rule = KeywordRule::new(
            "INV001",
            "Inventory data",
            Advisory::Inventory,
            &["STOCK".to_string()],
        );
        assert_eq!(rule.keywords(), ["stock"]);
        assert_eq!(
            rule.check(&sheet(&["Stock Actual"])),
            Some(Advisory::Inventory)
        );
    }

    #[test]
    fn test_empty_keyword_list_never_fires() {
        let rule = KeywordRule::new("INV001", "Inventory data", Advisory::Inventory, &[]);
        assert_eq!(rule.check(&sheet(&["Stock"])), None);
    }
}
