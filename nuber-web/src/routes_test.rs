//! Tests for the routing system
//!
//! Validates route tree selection, role-based dispatch and URL parsing for
//! the signed-in and signed-out routers.

#[cfg(test)]
mod tests {
    use crate::models::session::{SessionError, SessionState, TokenStorage};
    use crate::routes::{
        LoggedInRoute, LoggedOutRoute, RouteDecision, RouteTree, query_param, resolve_route,
        select_route_tree,
    };
    use shared::models::UserRole;
    use yew_router::Routable;

    struct FixedStorage(Option<&'static str>);

    impl TokenStorage for FixedStorage {
        fn load(&self) -> Option<String> {
            self.0.map(str::to_string)
        }

        fn save(&self, _token: &str) -> Result<(), SessionError> {
            Ok(())
        }

        fn clear(&self) {}
    }

    /// Tests that the session alone picks the route tree
    #[test]
    fn test_route_tree_follows_session() {
        let logged_out = SessionState::restore(&FixedStorage(None));
        assert_eq!(select_route_tree(&logged_out), RouteTree::LoggedOut);

        let logged_in = SessionState::login(&FixedStorage(None), "jwt".to_string()).unwrap();
        assert_eq!(select_route_tree(&logged_in), RouteTree::LoggedIn);

        let logged_out = SessionState::logout(&FixedStorage(Some("jwt")));
        assert_eq!(select_route_tree(&logged_out), RouteTree::LoggedOut);
    }

    /// Tests that clients reach every client page
    #[test]
    fn test_client_routes_render() {
        let routes = [
            LoggedInRoute::Home,
            LoggedInRoute::Search,
            LoggedInRoute::Category {
                slug: "korean-bbq".to_string(),
            },
            LoggedInRoute::Restaurant { id: 7 },
            LoggedInRoute::ConfirmEmail,
            LoggedInRoute::EditProfile,
        ];
        for route in routes {
            assert_eq!(
                resolve_route(UserRole::Client, &route),
                RouteDecision::Render,
                "{route:?}"
            );
        }
    }

    /// Tests that unknown paths redirect home for every role
    #[test]
    fn test_not_found_redirects_home() {
        for role in [
            UserRole::Client,
            UserRole::Owner,
            UserRole::Delivery,
            UserRole::Unknown,
        ] {
            assert_eq!(
                resolve_route(role, &LoggedInRoute::NotFound),
                RouteDecision::RedirectHome
            );
        }
    }

    /// Tests that non-client roles are sent home from client pages
    #[test]
    fn test_other_roles_redirect_from_client_pages() {
        for role in [UserRole::Owner, UserRole::Delivery] {
            assert_eq!(
                resolve_route(role, &LoggedInRoute::Search),
                RouteDecision::RedirectHome
            );
            assert_eq!(
                resolve_route(role, &LoggedInRoute::Restaurant { id: 1 }),
                RouteDecision::RedirectHome
            );
            assert_eq!(
                resolve_route(role, &LoggedInRoute::Home),
                RouteDecision::NotFound
            );
            assert_eq!(
                resolve_route(role, &LoggedInRoute::EditProfile),
                RouteDecision::Render
            );
        }
    }

    /// Tests that an unrecognized role only ever lands on home
    #[test]
    fn test_unknown_role_redirects_home() {
        assert_eq!(
            resolve_route(UserRole::Unknown, &LoggedInRoute::ConfirmEmail),
            RouteDecision::RedirectHome
        );
        assert_eq!(
            resolve_route(UserRole::Unknown, &LoggedInRoute::EditProfile),
            RouteDecision::RedirectHome
        );
        assert_eq!(
            resolve_route(UserRole::Unknown, &LoggedInRoute::Home),
            RouteDecision::NotFound
        );
    }

    /// Tests path recognition for parameterized routes
    #[test]
    fn test_route_recognition() {
        assert_eq!(
            LoggedInRoute::recognize("/restaurants/12"),
            Some(LoggedInRoute::Restaurant { id: 12 })
        );
        assert_eq!(
            LoggedInRoute::recognize("/category/pizza"),
            Some(LoggedInRoute::Category {
                slug: "pizza".to_string()
            })
        );
        assert_eq!(
            LoggedInRoute::recognize("/restaurants/abc"),
            Some(LoggedInRoute::NotFound)
        );
        assert_eq!(
            LoggedOutRoute::recognize("/create-account"),
            Some(LoggedOutRoute::CreateAccount)
        );
        assert_eq!(
            LoggedOutRoute::recognize("/edit-profile"),
            Some(LoggedOutRoute::NotFound)
        );
    }

    /// Tests route paths used by links
    #[test]
    fn test_route_paths() {
        assert_eq!(LoggedInRoute::Home.to_path(), "/");
        assert_eq!(LoggedInRoute::Restaurant { id: 3 }.to_path(), "/restaurants/3");
        assert_eq!(LoggedInRoute::EditProfile.to_path(), "/edit-profile");
        assert_eq!(LoggedOutRoute::Login.to_path(), "/");
    }

    /// Tests query string extraction
    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?code=abc-123", "code").as_deref(), Some("abc-123"));
        assert_eq!(query_param("code=abc", "code").as_deref(), Some("abc"));
        assert_eq!(
            query_param("?term=korean%20bbq", "term").as_deref(),
            Some("korean bbq")
        );
        assert_eq!(query_param("?term=a+b&page=2", "term").as_deref(), Some("a b"));
        assert_eq!(query_param("?term=", "term"), None);
        assert_eq!(query_param("", "code"), None);
        assert_eq!(query_param("?other=1", "code"), None);
    }
}
