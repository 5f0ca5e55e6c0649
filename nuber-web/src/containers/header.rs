use crate::api::NuberClient;
use crate::components::VerifyBanner;
use crate::models::me::{MeState, needs_verification};
use crate::models::session::{LocalTokenStorage, SessionState, sign_out};
use crate::routes::LoggedInRoute;
use yew::{Callback, Html, MouseEvent, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_store};

/// Top bar shown above every signed-in page.
#[function_component(Header)]
pub fn header() -> Html {
    let (me, me_dispatch) = use_store::<MeState>();
    let session_dispatch = use_dispatch::<SessionState>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&LoggedInRoute::Home);
        }
        sign_out(
            &session_dispatch,
            &me_dispatch,
            &LocalTokenStorage,
            &NuberClient::shared(),
        );
    });

    let verified = !needs_verification(me.current_user());

    html! {
        <>
            <VerifyBanner {verified} />
            <header class="py-4">
                <div class="mx-auto flex w-full max-w-screen-2xl items-center justify-between px-5 xl:px-0">
                    <Link<LoggedInRoute> to={LoggedInRoute::Home}>
                        <img src="/images/logo.svg" class="w-36" alt="Nuber Eats" />
                    </Link<LoggedInRoute>>
                    <nav class="flex items-center gap-5 text-xs">
                        <Link<LoggedInRoute> to={LoggedInRoute::EditProfile}>
                            {"Edit profile"}
                        </Link<LoggedInRoute>>
                        <button type="button" class="font-medium" onclick={on_logout}>
                            {"Log out"}
                        </button>
                    </nav>
                </div>
            </header>
        </>
    }
}
