use crate::containers::{LoggedInRouter, LoggedOutRouter};
use crate::models::session::SessionState;
use crate::routes::{RouteTree, select_route_tree};
use yew::{Html, function_component, html};
use yewdux::prelude::use_selector;

/// Mounts the route tree matching the current session.
///
/// Only the login state is selected, so token refreshes that keep the user
/// logged in do not remount the router.
#[function_component(App)]
pub fn app() -> Html {
    let tree = use_selector(|session: &SessionState| select_route_tree(session));

    match *tree {
        RouteTree::LoggedIn => html! { <LoggedInRouter /> },
        RouteTree::LoggedOut => html! { <LoggedOutRouter /> },
    }
}
