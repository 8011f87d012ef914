use leptos::prelude::*;
use thaw::*;

use super::use_navigation;
use crate::shared::auth::has_token;

#[component]
pub fn TopHeader() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Taller · Panel de administración"</span>
                <span class="top-header__section">{move || nav.active.get().label()}</span>
            </div>
            <div class="top-header__actions">
                {(!has_token()).then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                        "Sin sesión"
                    </Badge>
                })}
            </div>
        </div>
    }
}
