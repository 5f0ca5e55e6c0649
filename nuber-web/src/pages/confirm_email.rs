use crate::api::{ApiError, NuberClient};
use crate::hooks::use_page_title;
use crate::models::me::MeState;
use crate::routes::{LoggedInRoute, query_param};
use shared::models::CoreOutput;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::Dispatch;
use yewdux::prelude::use_dispatch;

/// Verification code carried by the link's query string.
pub fn verification_code(query: &str) -> Option<String> {
    query_param(query, "code")
}

/// Apply a `verifyEmail` result to the cached profile.
///
/// Returns `true` when the email is now verified and the user should be
/// sent home. Any failure leaves the cache untouched.
pub fn apply_verification(me: &Dispatch<MeState>, result: Result<CoreOutput, ApiError>) -> bool {
    match result {
        Ok(output) => {
            let mut state = (*me.get()).clone();
            if state.complete_verification(&output) {
                me.set(state);
                log::info!("email verified");
                true
            } else {
                log::warn!(
                    "email verification rejected: {}",
                    output.message().unwrap_or_default()
                );
                false
            }
        }
        Err(err) => {
            log::warn!("email verification failed: {err}");
            false
        }
    }
}

/// Submit `code` and apply the answer.
pub async fn confirm_email(client: &NuberClient, code: &str, me: &Dispatch<MeState>) -> bool {
    apply_verification(me, client.verify_email(code).await)
}

/// Landing page of the verification link, `/confirm?code=...`.
///
/// On success the cached profile is marked verified and the user is sent
/// home. Failures are only logged; the page keeps its waiting message.
#[function_component(ConfirmEmailPage)]
pub fn confirm_email_page() -> Html {
    use_page_title("Verify Email");

    let location = use_location();
    let navigator = use_navigator();
    let me_dispatch = use_dispatch::<MeState>();
    let code = location.and_then(|location| verification_code(location.query_str()));

    use_effect_with(code, move |code| {
        let Some(code) = code.clone() else {
            log::warn!("verification link without a code");
            return;
        };
        spawn_local(async move {
            if confirm_email(&NuberClient::shared(), &code, &me_dispatch).await {
                if let Some(navigator) = navigator {
                    navigator.push(&LoggedInRoute::Home);
                }
            }
        });
    });

    html! {
        <div class="mt-52 flex flex-col items-center justify-center">
            <h2 class="mb-1 text-lg font-medium">{"Confirming email..."}</h2>
            <h4 class="text-sm text-gray-700">{"Please wait, don't close this page..."}</h4>
        </div>
    }
}
