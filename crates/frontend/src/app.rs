use crate::layout::{Navigation, Shell};
use crate::shared::query_client::QueryClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Cache shared by every page; mutations invalidate through it.
    provide_context(QueryClient::new());

    provide_context(Navigation::new());

    view! {
        <Shell />
    }
}
