mod category;
mod confirm_email;
mod create_account;
mod edit_profile;
mod login;
mod not_found;
mod restaurant_detail;
mod restaurants;
mod search;

pub use category::CategoryPage;
pub use confirm_email::ConfirmEmailPage;
pub use create_account::CreateAccountPage;
pub use edit_profile::EditProfilePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use restaurant_detail::RestaurantDetailPage;
pub use restaurants::RestaurantsPage;
pub use search::SearchPage;
