//! Data shapes exchanged with the Nuber Eats GraphQL backend.

pub mod auth;
pub mod errors;
pub mod restaurant;
pub mod user;

pub use auth::{
    CoreOutput, CreateAccountInput, EditProfileInput, LoginInput, LoginOutput, UNKNOWN_FAILURE,
    VerifyEmailInput,
};
pub use errors::{GraphQLError, ResponseError};
pub use restaurant::{
    AllCategoriesOutput, Category, CategoryInput, CategoryName, CategoryOutput, Restaurant,
    RestaurantInput, RestaurantOutput, RestaurantsInput, RestaurantsOutput, SearchRestaurantInput,
    SearchRestaurantOutput,
};
pub use user::{CurrentUser, UserRole};
