use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VerifyBannerProps {
    pub verified: bool,
}

/// Reminder shown above every page until the email address is confirmed.
#[function_component(VerifyBanner)]
pub fn verify_banner(props: &VerifyBannerProps) -> Html {
    if props.verified {
        return html! {};
    }

    html! {
        <div class="bg-red-500 p-3 text-center text-base text-white">
            <span>{"Please verify your email."}</span>
        </div>
    }
}
