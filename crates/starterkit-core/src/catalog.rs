//! Static site content: the API reference and the component gallery.
//!
//! Both are embedded at build time and never change at runtime.

mod api_docs;
mod components;

pub use api_docs::{
    render_example, ApiDocs, ApiEndpoint, ApiExample, ApiParam, ApiProperty, ApiSchema,
    HttpMethod, UserRow,
};
pub use components::{ComponentCatalog, ComponentItem, ComponentStatus};

/// Distinct values in first-seen order.
fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_in_order() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(unique_in_order(values.into_iter()), vec!["b", "a", "c"]);
    }
}
