use serde::{Deserialize, Serialize};

/// Categories seeded into an empty database, with their display colours. The
/// client falls back to these colours before `/categories` has loaded.
pub const DEFAULT_CATEGORIES: [(&str, &str); 8] = [
    ("technology", "3b82f6"),
    ("science", "16a34a"),
    ("finance", "ef4444"),
    ("society", "eab308"),
    ("entertainment", "8b5cf6"),
    ("health", "ec4899"),
    ("history", "14b8a6"),
    ("news", "6b7280"),
];

/// Category as exposed over the API. The name is serialized as `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CategoryDto {
    pub id: i32,
    #[serde(rename = "category")]
    pub name: String,
    pub colour: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateCategoryDto {
    pub category: String,
    pub colour: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateCategoryDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CategoryData {
    pub category: CategoryDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CategoriesData {
    pub categories: Vec<CategoryDto>,
}
