mod api;
mod app;
mod components;
mod config;
mod containers;
mod hooks;
mod models;
mod pages;
mod routes;
mod validation;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("Starting Nuber Eats");

    Renderer::<Root>::new().render();
}
