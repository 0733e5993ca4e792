//! Route table: the single place mapping URL paths to views.

use crate::dashboards::FieldStatsDashboard;
use crate::domain::a001_form::ui::builder::FormBuilder;
use crate::domain::a002_person::ui::create::PersonCreate;
use crate::domain::a003_field_definition::ui::admin::FieldDefinitionAdmin;
use crate::layout::navbar::Navbar;
use crate::layout::pages::{HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Navigation entry for a routed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Every routed path; none take parameters
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", title: "Home", icon: "home" },
    RouteEntry { path: "/create", title: "New Person", icon: "person" },
    RouteEntry { path: "/admin", title: "Custom Fields", icon: "fields" },
    RouteEntry { path: "/builder", title: "Form Builder", icon: "form" },
    RouteEntry { path: "/dashboard", title: "Dashboard", icon: "dashboard" },
];

/// Title of the page served at `path`; a trailing slash is ignored
pub fn route_title(path: &str) -> Option<&'static str> {
    let path = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    ROUTES.iter().find(|r| r.path == path).map(|r| r.title)
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/create") view=PersonCreate />
                    <Route path=path!("/admin") view=FieldDefinitionAdmin />
                    <Route path=path!("/builder") view=FormBuilder />
                    <Route path=path!("/dashboard") view=FieldStatsDashboard />
                </Routes>
            </main>
        </Router>
    }
}
