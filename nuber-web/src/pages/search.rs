use crate::api::NuberClient;
use crate::components::{Loading, RestaurantGrid};
use crate::hooks::{Fetch, use_fetch, use_page_title};
use crate::routes::{LoggedInRoute, query_param};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    use_page_title("Search");

    let location = use_location();
    let navigator = use_navigator();
    let term = location.and_then(|location| query_param(location.query_str(), "term"));

    {
        let missing = term.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                if let Some(navigator) = navigator {
                    navigator.replace(&LoggedInRoute::Home);
                }
            }
        });
    }

    let results = use_fetch(term.clone(), |term| async move {
        match term {
            Some(term) => NuberClient::shared()
                .search_restaurant(&term, 1)
                .await
                .map(Some),
            None => Ok(None),
        }
    });

    let Some(term) = term else {
        return html! {};
    };

    let body = match &*results {
        Fetch::Loading | Fetch::Loaded(None) => html! { <Loading /> },
        Fetch::Failed(message) => html! {
            <p class="mt-8 text-center text-red-500">{ message.clone() }</p>
        },
        Fetch::Loaded(Some(output)) if !output.ok => html! {
            <p class="mt-8 text-center text-red-500">
                { output.error.clone().unwrap_or_default() }
            </p>
        },
        Fetch::Loaded(Some(output)) => {
            let restaurants = output.restaurants.clone().unwrap_or_default();
            html! {
                <>
                    <h4 class="text-sm opacity-60">
                        { format!("{} results", output.total_results.unwrap_or_default()) }
                    </h4>
                    <RestaurantGrid {restaurants} />
                </>
            }
        }
    };

    html! {
        <div class="mx-auto mt-8 max-w-screen-2xl px-5 pb-20">
            <h1 class="text-3xl font-medium">{ format!("Results for \"{term}\"") }</h1>
            { body }
        </div>
    }
}
