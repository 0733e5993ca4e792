use crate::routes::routes::ROUTES;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation built from the route table
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <span class="main-nav-bar__brand">"People Registry"</span>
            <ul>
                {ROUTES.iter().map(|route| view! {
                    <li>
                        <A href=route.path>
                            {icon(route.icon)}
                            <span>{route.title}</span>
                        </A>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}
