pub(crate) mod button;
pub(crate) mod category_chip;
pub(crate) mod form_error;
pub(crate) mod loading;
pub(crate) mod restaurant_card;
pub(crate) mod verify_banner;

// Re-export components for convenience
pub use button::Button;
pub use category_chip::CategoryChip;
pub use form_error::FormError;
pub use loading::Loading;
pub use restaurant_card::{RestaurantCard, RestaurantGrid, cover_url};
pub use verify_banner::VerifyBanner;
