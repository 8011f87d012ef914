mod apariencia_editor;

use contracts::domain::a016_config_web::aggregate::{ConfigWeb, ConfigWebParams, ConfigsWeb};
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::shared::form::{entity_form_view, FormCtx};
use crate::shared::hooks::use_crud;
use crate::shared::icons::icon;
use crate::shared::list::{Column, EntityUi, ListState};
use crate::shared::lookups::use_lookups;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

use apariencia_editor::{BannersEditor, LogoEditor};

impl EntityUi for ConfigsWeb {
    const PAGE_ID: &'static str = "a016_config_web--detail";

    // one record per store, edited in place
    fn columns() -> Vec<Column<ConfigWeb>> {
        Vec::new()
    }

    fn extra_editor(form: FormCtx) -> Option<AnyView> {
        Some(
            view! {
                <LogoEditor form=form />
                <BannersEditor form=form />
            }
            .into_any(),
        )
    }
}

/// Edits the store's web configuration, or creates it on first save.
#[component]
pub fn ConfigWebPage() -> impl IntoView {
    let crud = use_crud::<ConfigsWeb>(Signal::derive(ConfigWebParams::default));
    let lookups = use_lookups(&[]);
    // bumped to rebuild the form from the stored record
    let revision = RwSignal::new(0u32);

    let actual = Memo::new(move |_| {
        crud.data
            .with(|data| data.as_ref().map(|page| page.items.first().cloned()))
    });

    let on_done = Callback::new(move |_| revision.update(|r| *r += 1));

    view! {
        <PageFrame page_id=ConfigsWeb::PAGE_ID category=PAGE_CAT_DETAIL>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{ConfigsWeb::LIST_NAME}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| crud.refetch()>
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                </div>
            </div>

            <ListState
                loading=crud.is_loading
                error=crud.error
                empty=Signal::derive(move || actual.with(Option::is_none))
            />

            {move || {
                revision.track();
                // `None` until the first response; `Some(None)` when the store has no config yet
                actual.get().map(|config| {
                    let creating = config.is_none();
                    view! {
                        {creating.then(|| view! {
                            <div class="warning-box">
                                <span class="warning-box__text">
                                    "Esta tienda aún no tiene configuración web; al guardar se creará."
                                </span>
                            </div>
                        })}
                        {entity_form_view::<ConfigsWeb>(crud, lookups, config, on_done)}
                    }
                })
            }}
        </PageFrame>
    }
}
