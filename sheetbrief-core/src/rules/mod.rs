//! Advisory rule system

pub mod keywords;
pub mod registry;

use crate::reader::SheetSample;

/// Trait that all advisory rules must implement
pub trait SheetRule: Send + Sync {
    /// Unique rule identifier (e.g., "FIN001")
    fn id(&self) -> &str;

    /// Human-readable rule name
    fn name(&self) -> &str;

    /// Check a sheet and return the advisory it triggers, if any
    fn check(&self, sheet: &SheetSample) -> Option<Advisory>;
}

/// Heuristic hint attached to a sheet block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    Financial,
    Inventory,
}

impl Advisory {
    /// Line written to the report for this advisory
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::Financial => ">> Esta hoja parece contener DATOS FINANCIEROS.",
            Advisory::Inventory => ">> Esta hoja parece ser de INVENTARIO.",
        }
    }
}

/// Run every rule against a sheet, keeping rule order
pub fn classify(rules: &[Box<dyn SheetRule>], sheet: &SheetSample) -> Vec<Advisory> {
    rules.iter().filter_map(|rule| rule.check(sheet)).collect()
}
