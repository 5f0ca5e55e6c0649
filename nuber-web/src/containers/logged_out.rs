use crate::routes::{LoggedOutRoute, switch_logged_out};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

#[function_component(LoggedOutRouter)]
pub fn logged_out_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<LoggedOutRoute> render={switch_logged_out} />
        </BrowserRouter>
    }
}
