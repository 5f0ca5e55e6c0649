use crate::models::session::SessionState;
use crate::pages::*;
use serde::{Deserialize, Serialize};
use shared::models::UserRole;
use url::form_urlencoded;
use yew::prelude::*;
use yew_router::prelude::*;

/// Which of the two route trees is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTree {
    LoggedIn,
    LoggedOut,
}

/// Pick the route tree for a session.
pub fn select_route_tree(session: &SessionState) -> RouteTree {
    if session.is_logged_in() {
        RouteTree::LoggedIn
    } else {
        RouteTree::LoggedOut
    }
}

/// Routes reachable while signed in.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum LoggedInRoute {
    #[at("/")]
    Home,
    #[at("/search")]
    Search,
    #[at("/category/:slug")]
    Category { slug: String },
    #[at("/restaurants/:id")]
    Restaurant { id: i64 },
    #[at("/confirm")]
    ConfirmEmail,
    #[at("/edit-profile")]
    EditProfile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Routes reachable while signed out.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum LoggedOutRoute {
    #[at("/")]
    Login,
    #[at("/create-account")]
    CreateAccount,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of `/search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}

/// What the signed-in router does with a route for a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectHome,
    NotFound,
}

/// Decide whether `role` may see `route`.
///
/// Client pages belong to [`UserRole::Client`]; account pages are open to
/// every recognized role. Everything else goes back to `/`. When `/` itself
/// is off limits the not-found page is rendered instead of redirecting to
/// the same place.
pub fn resolve_route(role: UserRole, route: &LoggedInRoute) -> RouteDecision {
    let allowed = match route {
        LoggedInRoute::Home
        | LoggedInRoute::Search
        | LoggedInRoute::Category { .. }
        | LoggedInRoute::Restaurant { .. } => role == UserRole::Client,
        LoggedInRoute::ConfirmEmail | LoggedInRoute::EditProfile => role != UserRole::Unknown,
        LoggedInRoute::NotFound => false,
    };

    if allowed {
        RouteDecision::Render
    } else if *route == LoggedInRoute::Home {
        RouteDecision::NotFound
    } else {
        RouteDecision::RedirectHome
    }
}

/// Look up `key` in a URL query string, with or without the leading `?`.
///
/// Empty values count as absent.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn switch_logged_in(role: UserRole, route: LoggedInRoute) -> Html {
    match resolve_route(role, &route) {
        RouteDecision::RedirectHome => {
            html! { <Redirect<LoggedInRoute> to={LoggedInRoute::Home} /> }
        }
        RouteDecision::NotFound => html! { <NotFoundPage /> },
        RouteDecision::Render => match route {
            LoggedInRoute::Home => html! { <RestaurantsPage /> },
            LoggedInRoute::Search => html! { <SearchPage /> },
            LoggedInRoute::Category { slug } => html! { <CategoryPage {slug} /> },
            LoggedInRoute::Restaurant { id } => html! { <RestaurantDetailPage {id} /> },
            LoggedInRoute::ConfirmEmail => html! { <ConfirmEmailPage /> },
            LoggedInRoute::EditProfile => html! { <EditProfilePage /> },
            LoggedInRoute::NotFound => html! { <NotFoundPage /> },
        },
    }
}

pub fn switch_logged_out(route: LoggedOutRoute) -> Html {
    match route {
        LoggedOutRoute::Login => html! { <LoginPage /> },
        LoggedOutRoute::CreateAccount => html! { <CreateAccountPage /> },
        LoggedOutRoute::NotFound => html! { <NotFoundPage /> },
    }
}
