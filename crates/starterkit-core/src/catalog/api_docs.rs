use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::unique_in_order;
use crate::error::StarterKitError;

/// Embedded API reference: endpoints plus the sample table rows.
const API_DOCS_JSON: &str = include_str!("../../../../assets/api-docs.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A path or query parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub required: bool,
    pub description: String,
}

/// One field of a request or response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub allowed: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSchema {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub properties: Vec<ApiProperty>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiExample {
    #[serde(default)]
    pub request: Option<Value>,
    pub response: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub id: String,
    pub method: HttpMethod,
    pub path: String,
    pub description: String,
    #[serde(default)]
    pub query_params: Vec<ApiParam>,
    #[serde(default)]
    pub path_params: Vec<ApiParam>,
    #[serde(default)]
    pub request_body: Option<ApiSchema>,
    pub response_schema: ApiSchema,
    pub tags: Vec<String>,
    pub example: ApiExample,
}

impl ApiEndpoint {
    pub fn response_text(&self) -> String {
        render_example(&self.example.response)
    }

    pub fn request_text(&self) -> Option<String> {
        self.example.request.as_ref().map(render_example)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A row of the table demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDocs {
    endpoints: Vec<ApiEndpoint>,
    #[serde(default)]
    table_rows: Vec<UserRow>,
}

impl ApiDocs {
    pub fn from_json(json: &str) -> Result<Self, StarterKitError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The embedded reference.
    pub fn builtin() -> Self {
        Self::from_json(API_DOCS_JSON).expect("embedded API docs are valid JSON")
    }

    pub fn endpoints(&self) -> &[ApiEndpoint] {
        &self.endpoints
    }

    pub fn endpoint(&self, id: &str) -> Result<&ApiEndpoint, StarterKitError> {
        self.endpoints
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| StarterKitError::UnknownEndpoint(id.to_string()))
    }

    pub fn by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a ApiEndpoint> + 'a {
        self.endpoints.iter().filter(move |e| e.has_tag(tag))
    }

    /// All tags, in the order they first appear.
    pub fn tags(&self) -> Vec<&str> {
        unique_in_order(
            self.endpoints
                .iter()
                .flat_map(|e| e.tags.iter().map(String::as_str)),
        )
    }

    pub fn table_rows(&self) -> &[UserRow] {
        &self.table_rows
    }
}

/// Pretty-print an example payload with two-space indentation.
pub fn render_example(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_endpoints() {
        let docs = ApiDocs::builtin();
        let ids: Vec<_> = docs.endpoints().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "get-users",
                "get-user",
                "create-user",
                "update-user",
                "delete-user",
                "get-products"
            ]
        );
        assert_eq!(docs.table_rows().len(), 5);
    }

    #[test]
    fn test_endpoint_lookup() {
        let docs = ApiDocs::builtin();
        let create = docs.endpoint("create-user").unwrap();
        assert_eq!(create.method, HttpMethod::Post);
        assert_eq!(create.path, "/api/users");
        let body = create.request_body.as_ref().unwrap();
        assert!(body.properties.iter().any(|p| p.name == "email" && p.required));

        assert!(matches!(
            docs.endpoint("get-orders"),
            Err(StarterKitError::UnknownEndpoint(id)) if id == "get-orders"
        ));
    }

    #[test]
    fn test_tags_and_filter() {
        let docs = ApiDocs::builtin();
        assert_eq!(docs.tags(), vec!["users", "products"]);
        assert_eq!(docs.by_tag("users").count(), 5);
        assert_eq!(docs.by_tag("products").count(), 1);
        assert_eq!(docs.by_tag("orders").count(), 0);
    }

    #[test]
    fn test_render_example_keeps_field_order() {
        let docs = ApiDocs::builtin();
        let text = docs.endpoint("delete-user").unwrap().response_text();
        assert_eq!(
            text,
            "{\n  \"success\": true,\n  \"message\": \"User deleted successfully.\"\n}"
        );
    }

    #[test]
    fn test_request_text_only_when_present() {
        let docs = ApiDocs::builtin();
        assert!(docs.endpoint("get-users").unwrap().request_text().is_none());
        let text = docs.endpoint("update-user").unwrap().request_text().unwrap();
        assert!(text.contains("\"name\": \"홍길동 수정\""));
    }

    #[test]
    fn test_schema_enum_and_format() {
        let docs = ApiDocs::builtin();
        let get_user = docs.endpoint("get-user").unwrap();
        let role = get_user
            .response_schema
            .properties
            .iter()
            .find(|p| p.name == "role")
            .unwrap();
        assert_eq!(role.allowed, vec!["admin", "user", "guest"]);
        assert_eq!(get_user.path_params[0].name, "id");
    }
}
