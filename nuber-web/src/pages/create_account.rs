use crate::api::{NuberClient, form_message};
use crate::components::{Button, FormError};
use crate::hooks::use_page_title;
use crate::routes::LoggedOutRoute;
use crate::validation::{field_message, validate_email, validate_password};
use shared::models::UserRole;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

const ACCOUNT_CREATED: &str = "Account Created! Log in now";

#[function_component(CreateAccountPage)]
pub fn create_account_page() -> Html {
    use_page_title("Create Account");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(UserRole::default);
    let email_touched = use_state(|| false);
    let password_touched = use_state(|| false);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let is_valid = validate_email(&email).is_ok() && validate_password(&password).is_ok();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let role_handle = role.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading_handle || !is_valid {
                return;
            }
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            let role_value = *role_handle;
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = NuberClient::shared()
                    .create_account(&email_value, &password_value, role_value)
                    .await;
                loading_ref.set(false);
                let created = matches!(&result, Ok(output) if output.ok);
                error_ref.set(form_message(&result));
                if created {
                    log::info!("created {role_value} account for {email_value}");
                    if let Some(window) = web_sys::window() {
                        if window.alert_with_message(ACCOUNT_CREATED).is_err() {
                            log::warn!("unable to show the account created alert");
                        }
                    }
                    if let Some(navigator) = &navigator {
                        navigator.push(&LoggedOutRoute::Login);
                    }
                }
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

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                match select.value().parse::<UserRole>() {
                    Ok(selected) => role.set(selected),
                    Err(err) => log::warn!("{err}: {}", select.value()),
                }
            }
        })
    };

    let email_message = field_message(*email_touched, validate_email(&email));
    let password_message = field_message(*password_touched, validate_password(&password));

    html! {
        <div class="mt-10 flex h-screen flex-col items-center lg:mt-28">
            <div class="flex w-full max-w-screen-sm flex-col items-center px-5">
                <img src="/images/logo.svg" class="mb-10 w-52" alt="Nuber Eats" />
                <h4 class="mb-5 w-full text-left text-3xl font-medium">{"Let's get started"}</h4>
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
                    <select name="role" class="input" onchange={on_role_change}>
                        { for UserRole::SIGNUP_ROLES.iter().map(|option| html! {
                            <option value={option.as_str()} selected={*option == *role}>
                                { option.as_str() }
                            </option>
                        }) }
                    </select>
                    <Button can_click={is_valid} loading={*loading} action_text="Create Account" />
                    if let Some(message) = (*error).clone() {
                        <FormError {message} />
                    }
                </form>
                <div>
                    {"Already have an account? "}
                    <Link<LoggedOutRoute> to={LoggedOutRoute::Login} classes="text-lime-600 hover:underline">
                        {"Log in now"}
                    </Link<LoggedOutRoute>>
                </div>
            </div>
        </div>
    }
}
