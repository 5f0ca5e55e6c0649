use crate::api::{NuberClient, form_message};
use crate::components::{Button, FormError};
use crate::hooks::use_page_title;
use crate::models::me::{MeState, fetch_current_user};
use crate::validation::{field_message, validate_email};
use shared::models::EditProfileInput;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Change the signed-in user's email and password.
///
/// Changing the email resets the verified flag on the server, so a
/// successful save refetches the profile.
#[function_component(EditProfilePage)]
pub fn edit_profile_page() -> Html {
    use_page_title("Edit Profile");

    let (me, me_dispatch) = use_store::<MeState>();
    let email = {
        let current = me.current_user().map(|user| user.email.clone());
        use_state(move || current.unwrap_or_default())
    };
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let is_valid = validate_email(&email).is_ok();

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
            let input = EditProfileInput::from_form((*email_handle).clone(), (*password_handle).clone());
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let me_dispatch = me_dispatch.clone();
            spawn_local(async move {
                let result = NuberClient::shared().edit_profile(input).await;
                loading_ref.set(false);
                if matches!(&result, Ok(output) if output.ok) {
                    log::info!("profile updated");
                    fetch_current_user(me_dispatch);
                }
                error_ref.set(form_message(&result));
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let email_message = field_message(true, validate_email(&email));

    html! {
        <div class="mt-52 flex flex-col items-center justify-center">
            <h4 class="mb-3 text-2xl font-semibold">{"Edit Profile"}</h4>
            <form class="mb-5 mt-5 grid w-full max-w-screen-sm gap-3" {onsubmit}>
                <input
                    name="email"
                    type="email"
                    class="input"
                    placeholder="Email"
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
                    value={(*password).clone()}
                    oninput={on_password_change}
                />
                <Button can_click={is_valid} loading={*loading} action_text="Save Profile" />
                if let Some(message) = (*error).clone() {
                    <FormError {message} />
                }
            </form>
        </div>
    }
}
