use crate::routes::LoggedInRoute;
use shared::models::Restaurant;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Cover shown for restaurants that have no image of their own.
pub const DEFAULT_COVER: &str = "/images/default-restaurant.svg";

/// Cover image URL for `restaurant`, falling back to [`DEFAULT_COVER`].
pub fn cover_url(restaurant: &Restaurant) -> String {
    restaurant
        .cover_img
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_COVER.to_string())
}

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantCardProps {
    pub restaurant: Restaurant,
}

#[function_component(RestaurantCard)]
pub fn restaurant_card(props: &RestaurantCardProps) -> Html {
    let restaurant = &props.restaurant;
    let style = format!("background-image: url({})", cover_url(restaurant));

    html! {
        <Link<LoggedInRoute> to={LoggedInRoute::Restaurant { id: restaurant.id }}>
            <div class="flex flex-col">
                <div {style} class="mb-3 bg-cover bg-center py-28"></div>
                <h3 class="text-xl">{ restaurant.name.clone() }</h3>
                <span class="mt-2 border-t border-gray-400 py-2 text-xs opacity-50">
                    { restaurant.category_name().unwrap_or_default() }
                </span>
            </div>
        </Link<LoggedInRoute>>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantGridProps {
    pub restaurants: Vec<Restaurant>,
}

/// Three-column grid of [`RestaurantCard`]s.
#[function_component(RestaurantGrid)]
pub fn restaurant_grid(props: &RestaurantGridProps) -> Html {
    html! {
        <div class="mt-16 grid gap-x-5 gap-y-10 md:grid-cols-3">
            { for props.restaurants.iter().map(|restaurant| html! {
                <RestaurantCard key={restaurant.id} restaurant={restaurant.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn restaurant(cover_img: Option<&str>) -> Restaurant {
        Restaurant {
            id: 1,
            name: "Bibim".to_string(),
            cover_img: cover_img.map(str::to_string),
            category: None,
            address: "Seoul".to_string(),
            is_promoted: false,
        }
    }

    #[test]
    fn own_cover_is_used() {
        assert_eq!(cover_url(&restaurant(Some("http://img/1.jpg"))), "http://img/1.jpg");
    }

    #[test]
    fn missing_or_empty_cover_falls_back() {
        assert_eq!(cover_url(&restaurant(None)), DEFAULT_COVER);
        assert_eq!(cover_url(&restaurant(Some(""))), DEFAULT_COVER);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn fallback_cover_ships_with_the_app() {
        let asset = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_COVER.trim_start_matches('/'));
        assert!(asset.is_file(), "{} is missing", asset.display());
    }
}
