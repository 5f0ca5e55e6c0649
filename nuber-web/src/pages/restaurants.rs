use crate::api::NuberClient;
use crate::components::{CategoryChip, Loading, RestaurantGrid};
use crate::hooks::{Fetch, use_fetch, use_page_title};
use crate::routes::{LoggedInRoute, SearchQuery};
use shared::graphql::operations::RestaurantsPageData;
use shared::models::UNKNOWN_FAILURE;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Neighbouring pages of `page`, bounded by `total_pages`.
///
/// An unknown page count is treated as a single page.
pub fn adjacent_pages(page: u32, total_pages: Option<u32>) -> (Option<u32>, Option<u32>) {
    let last = total_pages.unwrap_or(1);
    let previous = (page > 1).then(|| page - 1);
    let next = (page < last).then(|| page + 1);
    (previous, next)
}

/// Message for a home page answer where either listing failed.
pub fn listing_error(data: &RestaurantsPageData) -> Option<String> {
    let failure = |ok: bool, error: &Option<String>| {
        (!ok).then(|| error.clone().unwrap_or_else(|| UNKNOWN_FAILURE.to_string()))
    };
    failure(data.restaurants.ok, &data.restaurants.error)
        .or_else(|| failure(data.all_categories.ok, &data.all_categories.error))
}

#[function_component(RestaurantsPage)]
pub fn restaurants_page() -> Html {
    use_page_title("Home");

    let page = use_state(|| 1_u32);
    let term = use_state(String::new);
    let navigator = use_navigator();
    let data = use_fetch(*page, |page| async move {
        NuberClient::shared().restaurants_page(page).await
    });

    let onsubmit = {
        let term = term.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let term = term.trim().to_string();
            if term.is_empty() {
                return;
            }
            if let Some(navigator) = &navigator {
                if let Err(err) = navigator.push_with_query(&LoggedInRoute::Search, &SearchQuery { term }) {
                    log::warn!("unable to open search: {err}");
                }
            }
        })
    };

    let on_term_change = {
        let term = term.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                term.set(input.value());
            }
        })
    };

    let search = html! {
        <form
            class="flex w-full items-center justify-center bg-gray-800 py-40"
            {onsubmit}
        >
            <input
                type="search"
                class="input w-3/4 rounded-md border-0 md:w-3/12"
                placeholder="Search restaurants..."
                value={(*term).clone()}
                oninput={on_term_change}
            />
        </form>
    };

    let body = match &*data {
        Fetch::Loading => html! { <Loading /> },
        Fetch::Failed(message) => html! {
            <p class="mt-8 text-center text-red-500">{ message.clone() }</p>
        },
        Fetch::Loaded(result) if listing_error(result).is_some() => html! {
            <p class="mt-8 text-center text-red-500">
                { listing_error(result).unwrap_or_default() }
            </p>
        },
        Fetch::Loaded(result) => {
            let categories = result.all_categories.categories.clone().unwrap_or_default();
            let restaurants = result.restaurants.results.clone().unwrap_or_default();
            let total_pages = result.restaurants.total_pages;
            let (previous, next) = adjacent_pages(*page, total_pages);
            let go_to = |target: Option<u32>| {
                let page = page.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(target) = target {
                        page.set(target);
                    }
                })
            };

            html! {
                <div class="mx-auto mt-8 max-w-screen-2xl pb-20">
                    <div class="mx-auto flex max-w-sm justify-around">
                        { for categories.into_iter().map(|category| {
                            let key = category.id;
                            html! { <CategoryChip {key} {category} /> }
                        }) }
                    </div>
                    <RestaurantGrid {restaurants} />
                    <div class="mx-auto mt-10 grid max-w-md grid-cols-3 items-center text-center">
                        if previous.is_some() {
                            <button class="text-2xl font-medium focus:outline-none" onclick={go_to(previous)}>
                                {"←"}
                            </button>
                        } else {
                            <div></div>
                        }
                        <span>{ format!("Page {} of {}", *page, total_pages.unwrap_or(1)) }</span>
                        if next.is_some() {
                            <button class="text-2xl font-medium focus:outline-none" onclick={go_to(next)}>
                                {"→"}
                            </button>
                        } else {
                            <div></div>
                        }
                    </div>
                </div>
            }
        }
    };

    html! {
        <div>
            { search }
            { body }
        </div>
    }
}
