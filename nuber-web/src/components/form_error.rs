use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormErrorProps {
    pub message: AttrValue,
}

/// Inline validation or server error under a form field.
#[function_component(FormError)]
pub fn form_error(props: &FormErrorProps) -> Html {
    html! {
        <span role="alert" class="font-medium text-red-500">{ props.message.clone() }</span>
    }
}
