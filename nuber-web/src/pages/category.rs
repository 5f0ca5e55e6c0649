use crate::api::NuberClient;
use crate::components::{Loading, RestaurantGrid};
use crate::hooks::{Fetch, use_fetch, use_page_title};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryPageProps {
    pub slug: String,
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let data = use_fetch(props.slug.clone(), |slug| async move {
        NuberClient::shared().category(&slug, 1).await
    });

    let title = match &*data {
        Fetch::Loaded(result) => result
            .category
            .category
            .as_ref()
            .map_or_else(|| props.slug.clone(), |category| category.name.clone()),
        Fetch::Loading | Fetch::Failed(_) => props.slug.clone(),
    };
    use_page_title(&title);

    let body = match &*data {
        Fetch::Loading => html! { <Loading /> },
        Fetch::Failed(message) => html! {
            <p class="mt-8 text-center text-red-500">{ message.clone() }</p>
        },
        Fetch::Loaded(result) if !result.category.ok => html! {
            <p class="mt-8 text-center text-red-500">
                { result.category.error.clone().unwrap_or_default() }
            </p>
        },
        Fetch::Loaded(result) => {
            let restaurants = result.category.restaurants.clone().unwrap_or_default();
            html! { <RestaurantGrid {restaurants} /> }
        }
    };

    html! {
        <div class="mx-auto mt-8 max-w-screen-2xl px-5 pb-20">
            <h1 class="text-3xl font-medium capitalize">{ title }</h1>
            { body }
        </div>
    }
}
