use crate::components::Loading;
use crate::containers::header::Header;
use crate::hooks::use_current_user;
use crate::routes::{LoggedInRoute, switch_logged_in};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Route tree for an authenticated session.
///
/// Nothing below the header renders until the profile is known, since the
/// role decides which routes exist. A failed `me` query leaves the loading
/// screen up.
#[function_component(LoggedInRouter)]
pub fn logged_in_router() -> Html {
    let me = use_current_user();

    let Some(user) = me.current_user() else {
        return html! { <Loading /> };
    };
    let role = user.role;

    html! {
        <BrowserRouter>
            <Header />
            <Switch<LoggedInRoute> render={move |route| switch_logged_in(role, route)} />
        </BrowserRouter>
    }
}
