use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex h-screen items-center justify-center">
            <span class="font-medium text-xl tracking-wide">{"Loading..."}</span>
        </div>
    }
}
