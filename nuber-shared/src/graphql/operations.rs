//! Queries and mutations issued by the web client.

use serde::Deserialize;

use super::{Input, NoVariables, Operation};
use crate::models::{
    AllCategoriesOutput, CategoryInput, CategoryOutput, CoreOutput, CreateAccountInput,
    CurrentUser, EditProfileInput, LoginInput, LoginOutput, RestaurantInput, RestaurantOutput,
    RestaurantsInput, RestaurantsOutput, SearchRestaurantInput, SearchRestaurantOutput,
    VerifyEmailInput,
};

macro_rules! restaurant_parts {
    () => {
        "fragment RestaurantParts on Restaurant { id name coverImg category { name slug } address isPromoted }"
    };
}

macro_rules! category_parts {
    () => {
        "fragment CategoryParts on Category { id name coverImg slug restaurantCount }"
    };
}

macro_rules! operation {
    ($ty:ident, $name:literal, $vars:ty, $data:ty, $doc:expr) => {
        #[doc = concat!("The `", $name, "` operation.")]
        #[derive(Debug, Clone, Copy)]
        pub struct $ty;

        impl Operation for $ty {
            type Variables = $vars;
            type Data = $data;

            const NAME: &'static str = $name;
            const DOCUMENT: &'static str = $doc;
        }
    };
}

operation!(
    Login,
    "loginMutation",
    Input<LoginInput>,
    LoginData,
    "mutation loginMutation($input: LoginInput!) { login(input: $input) { ok token error } }"
);

operation!(
    CreateAccount,
    "createAccountMutation",
    Input<CreateAccountInput>,
    CreateAccountData,
    "mutation createAccountMutation($input: CreateAccountInput!) { createAccount(input: $input) { ok error } }"
);

operation!(
    EditProfile,
    "editProfile",
    Input<EditProfileInput>,
    EditProfileData,
    "mutation editProfile($input: EditProfileInput!) { editProfile(input: $input) { ok error } }"
);

operation!(
    VerifyEmail,
    "verifyEmail",
    Input<VerifyEmailInput>,
    VerifyEmailData,
    "mutation verifyEmail($input: VerifyEmailInput!) { verifyEmail(input: $input) { ok error } }"
);

operation!(
    Me,
    "meQuery",
    NoVariables,
    MeData,
    "query meQuery { me { id email role verified } }"
);

operation!(
    RestaurantsPage,
    "restaurantsPageQuery",
    Input<RestaurantsInput>,
    RestaurantsPageData,
    concat!(
        "query restaurantsPageQuery($input: RestaurantsInput!) { ",
        "allCategories { ok error categories { ...CategoryParts } } ",
        "restaurants(input: $input) { ok error totalPages totalResults results { ...RestaurantParts } } } ",
        restaurant_parts!(),
        " ",
        category_parts!()
    )
);

operation!(
    SearchRestaurant,
    "searchRestaurant",
    Input<SearchRestaurantInput>,
    SearchRestaurantData,
    concat!(
        "query searchRestaurant($input: SearchRestaurantInput!) { ",
        "searchRestaurant(input: $input) { ok error totalPages totalResults restaurants { ...RestaurantParts } } } ",
        restaurant_parts!()
    )
);

operation!(
    CategoryPage,
    "category",
    Input<CategoryInput>,
    CategoryData,
    concat!(
        "query category($input: CategoryInput!) { ",
        "category(input: $input) { ok error totalPages totalResults ",
        "restaurants { ...RestaurantParts } category { ...CategoryParts } } } ",
        restaurant_parts!(),
        " ",
        category_parts!()
    )
);

operation!(
    RestaurantDetail,
    "restaurant",
    Input<RestaurantInput>,
    RestaurantData,
    concat!(
        "query restaurant($input: RestaurantInput!) { ",
        "restaurant(input: $input) { ok error restaurant { ...RestaurantParts } } } ",
        restaurant_parts!()
    )
);

/// Data returned by [`Login`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginData {
    /// Mutation output.
    pub login: LoginOutput,
}

/// Data returned by [`CreateAccount`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountData {
    /// Mutation output.
    pub create_account: CoreOutput,
}

/// Data returned by [`EditProfile`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileData {
    /// Mutation output.
    pub edit_profile: CoreOutput,
}

/// Data returned by [`VerifyEmail`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailData {
    /// Mutation output.
    pub verify_email: CoreOutput,
}

/// Data returned by [`Me`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MeData {
    /// The authenticated user.
    pub me: CurrentUser,
}

/// Data returned by [`RestaurantsPage`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantsPageData {
    /// Every category, for the category strip.
    pub all_categories: AllCategoriesOutput,
    /// One page of restaurants.
    pub restaurants: RestaurantsOutput,
}

/// Data returned by [`SearchRestaurant`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRestaurantData {
    /// Query output.
    pub search_restaurant: SearchRestaurantOutput,
}

/// Data returned by [`CategoryPage`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CategoryData {
    /// Query output.
    pub category: CategoryOutput,
}

/// Data returned by [`RestaurantDetail`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RestaurantData {
    /// Query output.
    pub restaurant: RestaurantOutput,
}
