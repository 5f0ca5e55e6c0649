use crate::hooks::use_page_title;
use yew::{Html, function_component, html};

/// Shown for unknown paths, and for `/` when the role has no home page.
///
/// The link is a plain anchor so it works under either route tree.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_page_title("Not Found");

    html! {
        <div class="flex h-screen flex-col items-center justify-center">
            <h2 class="mb-3 text-2xl font-semibold">{"Page Not Found."}</h2>
            <h4 class="mb-5 text-base font-medium">
                {"The page you're looking for does not exist or has moved."}
            </h4>
            <a class="text-lime-600 hover:underline" href="/">{"Go back home →"}</a>
        </div>
    }
}
