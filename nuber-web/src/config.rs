//! Frontend configuration module
//!
//! Compile-time settings for reaching the GraphQL backend and persisting the
//! session token.

/// Browser storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "nuber-token";

/// Request header carrying the session token.
pub const TOKEN_HEADER: &str = "x-jwt";

/// Suffix appended to every page title.
pub const TITLE_SUFFIX: &str = "Nuber Eats";

const DEFAULT_GRAPHQL_URL: &str = "http://localhost:4000/graphql";

/// Frontend configuration for the backend endpoint
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// GraphQL endpoint URL
    pub graphql_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            graphql_url: option_env!("NUBER_GRAPHQL_URL")
                .unwrap_or(DEFAULT_GRAPHQL_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the GraphQL endpoint URL
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }
}

/// Format a document title as `"<page> | Nuber Eats"`.
pub fn page_title(page: &str) -> String {
    format!("{page} | {TITLE_SUFFIX}")
}
