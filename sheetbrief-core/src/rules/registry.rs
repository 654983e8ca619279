//! Rule registry

use super::keywords::KeywordRule;
use super::{Advisory, SheetRule};
use crate::config::KeywordConfig;

/// Build the advisory rules in report order: financial, then inventory
pub fn create_rules(keywords: &KeywordConfig) -> Vec<Box<dyn SheetRule>> {
    vec![
        Box::new(KeywordRule::new(
            "FIN001",
            "Financial data",
            Advisory::Financial,
            &keywords.financial,
        )),
        Box::new(KeywordRule::new(
            "INV001",
            "Inventory data",
            Advisory::Inventory,
            &keywords.inventory,
        )),
    ]
}
