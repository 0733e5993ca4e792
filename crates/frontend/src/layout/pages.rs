use crate::routes::routes::ROUTES;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--start" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <h2>"People Registry"</h2>
            </div>
            <div class="page__content home-cards">
                {ROUTES.iter().filter(|r| r.path != "/").map(|route| view! {
                    <div class="home-card">
                        <A href=route.path>
                            {icon(route.icon)}
                            <span>{route.title}</span>
                        </A>
                    </div>
                }).collect_view()}
            </div>
        </PageFrame>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--not_found" category=PAGE_CAT_CUSTOM>
            <div class="page__header">
                <h2>"Page not found"</h2>
            </div>
            <div class="page__content">
                <A href="/">"Back to start"</A>
            </div>
        </PageFrame>
    }
}
