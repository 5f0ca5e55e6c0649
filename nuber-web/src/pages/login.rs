use crate::api::NuberClient;
use crate::components::{Button, FormError};
use crate::hooks::use_page_title;
use crate::models::session::{LocalTokenStorage, SessionState, sign_in};
use crate::routes::LoggedOutRoute;
use crate::validation::{field_message, validate_email, validate_password};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_dispatch;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    use_page_title("Login");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let email_touched = use_state(|| false);
    let password_touched = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let session = use_dispatch::<SessionState>();

    let is_valid = validate_email(&email).is_ok() && validate_password(&password).is_ok();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading_handle || !is_valid {
                return;
            }
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let session = session.clone();
            spawn_local(async move {
                let client = NuberClient::shared();
                let result = client.login(&email_value, &password_value).await;
                loading_ref.set(false);
                let message = match result {
                    Ok(output) => match output.into_token() {
                        Ok(token) => sign_in(&session, &LocalTokenStorage, &client, token)
                            .err()
                            .map(|err| err.to_string()),
                        Err(message) => Some(message),
                    },
                    Err(err) => Some(err.to_string()),
                };
                if let Some(message) = &message {
                    log::warn!("login failed: {message}");
                }
                error_ref.set(message);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        let touched = email_touched.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                touched.set(true);
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        let touched = password_touched.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                touched.set(true);
            }
        })
    };

    let email_message = field_message(*email_touched, validate_email(&email));
    let password_message = field_message(*password_touched, validate_password(&password));

    html! {
        <div class="mt-10 flex h-screen flex-col items-center lg:mt-28">
            <div class="flex w-full max-w-screen-sm flex-col items-center px-5">
                <img src="/images/logo.svg" class="mb-10 w-52" alt="Nuber Eats" />
                <h4 class="mb-5 w-full text-left text-3xl font-medium">{"Welcome back"}</h4>
                <form class="mb-5 mt-5 grid w-full gap-3" {onsubmit}>
                    <input
                        name="email"
                        type="email"
                        class="input"
                        placeholder="Email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                    if let Some(message) = email_message {
                        <FormError {message} />
                    }
                    <input
                        name="password"
                        type="password"
                        class="input"
                        placeholder="Password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                    if let Some(message) = password_message {
                        <FormError {message} />
                    }
                    <Button can_click={is_valid} loading={*loading} action_text="Log in" />
                    if let Some(message) = (*error).clone() {
                        <FormError {message} />
                    }
                </form>
                <div>
                    {"New to Nuber? "}
                    <Link<LoggedOutRoute> to={LoggedOutRoute::CreateAccount} classes="text-lime-600 hover:underline">
                        {"Create an Account"}
                    </Link<LoggedOutRoute>>
                </div>
            </div>
        </div>
    }
}
