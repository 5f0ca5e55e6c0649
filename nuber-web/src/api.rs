use crate::config::{FrontendConfig, TOKEN_HEADER};
use crate::models::session::{LocalTokenStorage, TokenStorage};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder};
use shared::graphql::operations::{
    CategoryData, CategoryPage, CreateAccount, EditProfile, Login, Me, RestaurantData,
    RestaurantDetail, RestaurantsPage, RestaurantsPageData, SearchRestaurant, VerifyEmail,
};
use shared::graphql::{GraphQLRequest, GraphQLResponse, Input, NoVariables, Operation};
use shared::models::{
    CategoryInput, CoreOutput, CreateAccountInput, CurrentUser, EditProfileInput, LoginInput,
    LoginOutput, ResponseError, RestaurantInput, RestaurantsInput, SearchRestaurantInput,
    SearchRestaurantOutput, UserRole, VerifyEmailInput,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

thread_local! {
    static SHARED_CLIENT: OnceCell<NuberClient> = OnceCell::new();
}

/// Failure of a GraphQL round trip.
///
/// Forms display the `Display` text directly, so transport and server
/// failures read the same to the user.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unable to reach the server: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Response(#[from] ResponseError),
}

/// GraphQL client for the Nuber Eats backend.
#[derive(Clone, Debug)]
pub struct NuberClient {
    endpoint: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl NuberClient {
    /// Create a client for the configured endpoint, picking up any token
    /// already persisted in browser storage.
    pub fn new(config: &FrontendConfig) -> Self {
        let client = Self::with_endpoint(config.graphql_url());
        client.set_token(LocalTokenStorage.load());
        client
    }

    /// Create a client without consulting browser storage.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::default()))
                .clone()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token.filter(|token| !token.is_empty());
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    // The backend expects the header on every request, empty when signed out.
    fn apply_token(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(TOKEN_HEADER, self.current_token().unwrap_or_default())
    }

    /// Execute operation `O` and return its data.
    pub async fn execute<O: Operation>(&self, variables: O::Variables) -> Result<O::Data, ApiError> {
        let body = GraphQLRequest::new::<O>(variables);
        log::debug!("graphql request {}", O::NAME);
        let response = self
            .apply_token(self.client.post(&self.endpoint))
            .json(&body)
            .send()
            .await?;
        let payload: GraphQLResponse<O::Data> = response.json().await?;
        payload.into_result().map_err(|err| {
            log::warn!("graphql {} failed: {err}", O::NAME);
            ApiError::from(err)
        })
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutput, ApiError> {
        let input = LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        };
        Ok(self.execute::<Login>(Input::new(input)).await?.login)
    }

    pub async fn create_account(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<CoreOutput, ApiError> {
        let input = CreateAccountInput {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        Ok(self
            .execute::<CreateAccount>(Input::new(input))
            .await?
            .create_account)
    }

    pub async fn edit_profile(&self, input: EditProfileInput) -> Result<CoreOutput, ApiError> {
        Ok(self
            .execute::<EditProfile>(Input::new(input))
            .await?
            .edit_profile)
    }

    pub async fn verify_email(&self, code: &str) -> Result<CoreOutput, ApiError> {
        let input = VerifyEmailInput {
            code: code.to_string(),
        };
        Ok(self
            .execute::<VerifyEmail>(Input::new(input))
            .await?
            .verify_email)
    }

    /// Fetch the authenticated user's profile.
    pub async fn me(&self) -> Result<CurrentUser, ApiError> {
        Ok(self.execute::<Me>(NoVariables {}).await?.me)
    }

    /// Fetch all categories and one page of restaurants.
    pub async fn restaurants_page(&self, page: u32) -> Result<RestaurantsPageData, ApiError> {
        self.execute::<RestaurantsPage>(Input::new(RestaurantsInput { page }))
            .await
    }

    pub async fn search_restaurant(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchRestaurantOutput, ApiError> {
        let input = SearchRestaurantInput {
            page,
            query: query.to_string(),
        };
        Ok(self
            .execute::<SearchRestaurant>(Input::new(input))
            .await?
            .search_restaurant)
    }

    pub async fn category(&self, slug: &str, page: u32) -> Result<CategoryData, ApiError> {
        let input = CategoryInput {
            page,
            slug: slug.to_string(),
        };
        self.execute::<CategoryPage>(Input::new(input)).await
    }

    pub async fn restaurant(&self, restaurant_id: i64) -> Result<RestaurantData, ApiError> {
        self.execute::<RestaurantDetail>(Input::new(RestaurantInput { restaurant_id }))
            .await
    }
}

/// Reduce a mutation result to the message a form should display.
pub fn form_message(result: &Result<CoreOutput, ApiError>) -> Option<String> {
    match result {
        Ok(output) => output.message(),
        Err(err) => Some(err.to_string()),
    }
}
