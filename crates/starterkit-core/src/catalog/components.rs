use std::fmt;

use serde::{Deserialize, Serialize};

use super::unique_in_order;
use crate::error::StarterKitError;

const COMPONENTS_TOML: &str = include_str!("../../../../assets/components.toml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Stable,
    Beta,
    Experimental,
}

impl ComponentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentStatus::Stable => "stable",
            ComponentStatus::Beta => "beta",
            ComponentStatus::Experimental => "experimental",
        }
    }
}

impl fmt::Display for ComponentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub status: ComponentStatus,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentCatalog {
    components: Vec<ComponentItem>,
}

impl ComponentCatalog {
    pub fn from_toml(toml_str: &str) -> Result<Self, StarterKitError> {
        toml::from_str(toml_str).map_err(|e| StarterKitError::Config(format!("components: {e}")))
    }

    pub fn builtin() -> Self {
        Self::from_toml(COMPONENTS_TOML).expect("embedded component catalog is valid TOML")
    }

    pub fn components(&self) -> &[ComponentItem] {
        &self.components
    }

    pub fn component(&self, id: &str) -> Result<&ComponentItem, StarterKitError> {
        self.components
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| StarterKitError::UnknownComponent(id.to_string()))
    }

    /// All categories, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        unique_in_order(self.components.iter().map(|c| c.category.as_str()))
    }

    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ComponentItem> + 'a {
        self.components
            .iter()
            .filter(move |c| c.category.eq_ignore_ascii_case(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ComponentCatalog::builtin();
        assert_eq!(catalog.components().len(), 12);
        assert!(catalog
            .components()
            .iter()
            .all(|c| c.status == ComponentStatus::Stable));
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = ComponentCatalog::builtin();
        assert_eq!(
            catalog.categories(),
            vec!["Basics", "Layout", "Overlay", "Forms", "Data Display", "Feedback"]
        );
    }

    #[test]
    fn test_in_category() {
        let catalog = ComponentCatalog::builtin();
        let forms: Vec<_> = catalog.in_category("forms").map(|c| c.id.as_str()).collect();
        assert_eq!(forms, vec!["input", "select", "checkbox", "radio-group"]);
        assert_eq!(catalog.in_category("Charts").count(), 0);
    }

    #[test]
    fn test_component_lookup() {
        let catalog = ComponentCatalog::builtin();
        assert_eq!(catalog.component("dialog").unwrap().name, "Modal / Dialog");
        assert!(matches!(
            catalog.component("carousel"),
            Err(StarterKitError::UnknownComponent(_))
        ));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let toml_str = r#"
            [[components]]
            id = "x"
            name = "X"
            description = ""
            category = "Misc"
            status = "deprecated"
            tags = []
        "#;
        assert!(ComponentCatalog::from_toml(toml_str).is_err());
    }
}
