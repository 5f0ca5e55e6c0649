use crate::api::NuberClient;
use crate::components::Loading;
use crate::components::cover_url;
use crate::hooks::{Fetch, use_fetch, use_page_title};
use crate::routes::LoggedInRoute;
use shared::models::Restaurant;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Link target and label for the restaurant's category.
///
/// The route uses the slug and the label shows the display name.
pub fn category_link(restaurant: &Restaurant) -> Option<(LoggedInRoute, String)> {
    let category = restaurant.category.as_ref()?;
    let route = LoggedInRoute::Category {
        slug: category.slug.clone(),
    };
    Some((route, category.name.clone()))
}

#[derive(Properties, PartialEq, Clone)]
pub struct RestaurantDetailPageProps {
    pub id: i64,
}

#[function_component(RestaurantDetailPage)]
pub fn restaurant_detail_page(props: &RestaurantDetailPageProps) -> Html {
    let data = use_fetch(props.id, |id| async move {
        NuberClient::shared().restaurant(id).await
    });

    let restaurant = match &*data {
        Fetch::Loaded(result) => result.restaurant.restaurant.clone(),
        Fetch::Loading | Fetch::Failed(_) => None,
    };
    use_page_title(restaurant.as_ref().map_or("", |restaurant| restaurant.name.as_str()));

    let Some(restaurant) = restaurant else {
        return match &*data {
            Fetch::Loading => html! { <Loading /> },
            Fetch::Failed(message) => html! {
                <p class="mt-8 text-center text-red-500">{ message.clone() }</p>
            },
            Fetch::Loaded(result) => html! {
                <p class="mt-8 text-center text-red-500">
                    { result.restaurant.error.clone().unwrap_or_default() }
                </p>
            },
        };
    };

    let cover = cover_url(&restaurant);
    let category = category_link(&restaurant);

    html! {
        <div
            class="bg-gray-800 bg-cover bg-center py-48"
            style={format!("background-image: url({cover})")}
        >
            <div class="w-3/12 bg-white py-8 md:pl-10 lg:pl-40">
                <h4 class="mb-3 text-4xl">{ restaurant.name.clone() }</h4>
                if let Some((route, name)) = category {
                    <Link<LoggedInRoute> to={route}>
                        <h5 class="mb-2 text-sm font-light">{ name }</h5>
                    </Link<LoggedInRoute>>
                }
                <h6 class="text-sm font-light">{ restaurant.address.clone() }</h6>
            </div>
        </div>
    }
}
