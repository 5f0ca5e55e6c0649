use crate::routes::LoggedInRoute;
use shared::models::Category;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryChipProps {
    pub category: Category,
}

#[function_component(CategoryChip)]
pub fn category_chip(props: &CategoryChipProps) -> Html {
    let category = &props.category;
    let icon = category.cover_img.clone().unwrap_or_default();

    html! {
        <Link<LoggedInRoute> to={LoggedInRoute::Category { slug: category.slug.clone() }}>
            <div class="group flex cursor-pointer flex-col items-center">
                <div
                    class="h-16 w-16 rounded-full bg-cover group-hover:bg-gray-100"
                    style={format!("background-image: url({icon})")}
                ></div>
                <span class="mt-1 text-center text-sm font-medium">{ category.name.clone() }</span>
            </div>
        </Link<LoggedInRoute>>
    }
}
