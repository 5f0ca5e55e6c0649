use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ButtonProps {
    pub can_click: bool,
    pub loading: bool,
    pub action_text: AttrValue,
}

/// Submit button for the account forms.
///
/// Greyed out until the form is valid and replaced by `Loading...` while the
/// request is in flight.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        "text-lg",
        "font-medium",
        "focus:outline-none",
        "text-white",
        "py-4",
        "transition-colors",
        if props.can_click {
            "bg-lime-600 hover:bg-lime-700"
        } else {
            "bg-gray-300 pointer-events-none"
        },
    );

    html! {
        <button
            role="cmbutton"
            type="submit"
            {class}
            disabled={!props.can_click || props.loading}
        >
            if props.loading {
                { "Loading..." }
            } else {
                { props.action_text.clone() }
            }
        </button>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(can_click: bool, loading: bool) -> String {
        ServerRenderer::<Button>::with_props(move || ButtonProps {
            can_click,
            loading,
            action_text: "Log in".into(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn shows_action_text_when_idle() {
        let html = render(true, false).await;
        assert!(html.contains("Log in"));
        assert!(html.contains("bg-lime-600"));
        assert!(!html.contains("disabled"));
    }

    #[tokio::test]
    async fn shows_loading_while_busy() {
        let html = render(true, true).await;
        assert!(html.contains("Loading..."));
        assert!(!html.contains("Log in"));
    }

    #[tokio::test]
    async fn greyed_out_until_valid() {
        let html = render(false, false).await;
        assert!(html.contains("bg-gray-300"));
        assert!(html.contains("disabled"));
    }
}
