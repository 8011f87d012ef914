//! Root wrapper for every page rendered in the shell.
//!
//! Sets `id="{section}--{category}"` and `data-page-category` on the root
//! element so pages can be located in the DOM.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_REPORT: &str = "report";

#[component]
pub fn PageFrame(
    /// e.g. `"a001_proveedor--list"`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
