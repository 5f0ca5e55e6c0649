use serde::{Deserialize, Serialize};

/// The `RestaurantParts` fragment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover_img: Option<String>,
    /// Category the restaurant belongs to.
    #[serde(default)]
    pub category: Option<CategoryName>,
    /// Street address.
    pub address: String,
    /// Whether the owner paid for promotion.
    #[serde(default)]
    pub is_promoted: bool,
}

impl Restaurant {
    /// Name of the restaurant's category, if it has one.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.name.as_str())
    }

    /// Slug of the restaurant's category, for `/category/:slug` links.
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.slug.as_str())
    }
}

/// Category reference embedded in a restaurant.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CategoryName {
    /// Category display name.
    pub name: String,
    /// URL-safe identifier, which may differ from the name.
    pub slug: String,
}

/// The `CategoryParts` fragment.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Icon image URL.
    #[serde(default)]
    pub cover_img: Option<String>,
    /// URL-safe identifier used by `/category/:slug`.
    pub slug: String,
    /// Number of restaurants in the category.
    #[serde(default)]
    pub restaurant_count: i64,
}

/// Input for the paginated `restaurants` query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RestaurantsInput {
    /// 1-based page number.
    pub page: u32,
}

/// Input for the `searchRestaurant` query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchRestaurantInput {
    /// 1-based page number.
    pub page: u32,
    /// Search term.
    pub query: String,
}

/// Input for the `category` query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryInput {
    /// 1-based page number.
    pub page: u32,
    /// Category slug.
    pub slug: String,
}

/// Input for the `restaurant` query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInput {
    /// Restaurant identifier.
    pub restaurant_id: i64,
}

/// Output of `allCategories`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AllCategoriesOutput {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Server-provided failure reason.
    #[serde(default)]
    pub error: Option<String>,
    /// Every category.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Output of the paginated `restaurants` query.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantsOutput {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Server-provided failure reason.
    #[serde(default)]
    pub error: Option<String>,
    /// Number of pages available.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Number of restaurants across all pages.
    #[serde(default)]
    pub total_results: Option<u32>,
    /// Restaurants on the requested page.
    #[serde(default)]
    pub results: Option<Vec<Restaurant>>,
}

/// Output of `searchRestaurant`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRestaurantOutput {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Server-provided failure reason.
    #[serde(default)]
    pub error: Option<String>,
    /// Number of pages available.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Number of matches across all pages.
    #[serde(default)]
    pub total_results: Option<u32>,
    /// Matches on the requested page.
    #[serde(default)]
    pub restaurants: Option<Vec<Restaurant>>,
}

/// Output of `category`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Server-provided failure reason.
    #[serde(default)]
    pub error: Option<String>,
    /// Number of pages available.
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Number of restaurants in the category.
    #[serde(default)]
    pub total_results: Option<u32>,
    /// Restaurants on the requested page.
    #[serde(default)]
    pub restaurants: Option<Vec<Restaurant>>,
    /// The category itself.
    #[serde(default)]
    pub category: Option<Category>,
}

/// Output of `restaurant`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct RestaurantOutput {
    /// Whether the query succeeded.
    pub ok: bool,
    /// Server-provided failure reason.
    #[serde(default)]
    pub error: Option<String>,
    /// The requested restaurant.
    #[serde(default)]
    pub restaurant: Option<Restaurant>,
}
