//! Logo and banner pickers of the web configuration form.

use contracts::domain::a009_producto::imagenes::check_nueva_imagen;
use contracts::domain::a016_config_web::aggregate::Banner;
use contracts::domain::a016_config_web::banners::{
    agregar, mover, parse_banners, quitar, serialize_banners, BANNERS_FIELD, LOGO_FIELD,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::file_utils::{files_from_event, read_file, PickedFile};
use crate::shared::form::{field_error, FormCtx};
use crate::shared::icons::icon;

/// Reads the picked images, reporting the first one that is rejected.
async fn leer_imagenes(files: Vec<web_sys::File>) -> (Vec<PickedFile>, Option<String>) {
    let mut leidas = Vec::new();
    let mut problema = None;
    for file in files {
        match read_file(&file).await {
            Ok(picked) => match check_nueva_imagen(0, picked.bytes.len(), &picked.mime) {
                Ok(()) => leidas.push(picked),
                Err(motivo) => {
                    problema.get_or_insert(format!("{}: {}", picked.name, motivo));
                }
            },
            Err(e) => {
                log::warn!("image read failed: {}", e);
                problema.get_or_insert(e);
            }
        }
    }
    (leidas, problema)
}

fn editar_banners(form: FormCtx, edit: impl FnOnce(Vec<Banner>) -> Vec<Banner>) {
    let banners = edit(parse_banners(&form.get_untracked(BANNERS_FIELD)));
    form.set(BANNERS_FIELD, serialize_banners(&banners));
}

fn texto_opcional(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn LogoEditor(form: FormCtx) -> impl IntoView {
    let problema = RwSignal::new(None::<String>);
    let logo = move || form.get(LOGO_FIELD);

    let on_pick = move |ev: web_sys::Event| {
        let files = files_from_event(&ev);
        spawn_local(async move {
            let (leidas, error) = leer_imagenes(files).await;
            problema.set(error);
            if let Some(picked) = leidas.into_iter().next() {
                form.set(LOGO_FIELD, picked.data_uri());
            }
        });
    };

    view! {
        <div class="form-group">
            <label class="form-group__label">"Logo"</label>
            <div class="image-grid">
                {move || {
                    let src = logo();
                    (!src.is_empty()).then(|| view! {
                        <div class="image-grid__item">
                            <img class="image-grid__thumb" src=src alt="Logo" />
                            <button
                                class="button button--icon button--danger image-grid__remove"
                                title="Quitar logo"
                                on:click=move |_| form.set(LOGO_FIELD, "")
                            >
                                {icon("x")}
                            </button>
                        </div>
                    })
                }}
            </div>
            <label class="button button--secondary image-grid__add">
                {icon("upload")}
                {move || if logo().is_empty() { "Subir logo" } else { "Cambiar logo" }}
                <input type="file" accept="image/*" hidden=true on:change=on_pick />
            </label>
            {move || problema.get().map(|m| view! { <div class="form-group__error">{m}</div> })}
            {field_error(form, LOGO_FIELD)}
        </div>
    }
}

#[component]
pub fn BannersEditor(form: FormCtx) -> impl IntoView {
    let banners = Memo::new(move |_| parse_banners(&form.get(BANNERS_FIELD)));
    // rows are rebuilt only when their count changes so inputs keep focus
    let filas = Memo::new(move |_| banners.with(Vec::len));
    let problema = RwSignal::new(None::<String>);

    let on_pick = move |ev: web_sys::Event| {
        let files = files_from_event(&ev);
        spawn_local(async move {
            let (leidas, error) = leer_imagenes(files).await;
            problema.set(error);
            if !leidas.is_empty() {
                editar_banners(form, |mut list| {
                    for picked in leidas {
                        list = agregar(list, picked.data_uri());
                    }
                    list
                });
            }
        });
    };

    let campo = move |index: usize, get: fn(&Banner) -> String| {
        move || banners.with(|b| b.get(index).map(get).unwrap_or_default())
    };

    let fila = move |index: usize| {
        view! {
            <div class="banner-row">
                <img class="image-grid__thumb" src=campo(index, |b| b.imagen.clone()) alt="" />
                <div class="banner-row__fields">
                    <input
                        type="text"
                        class="form-group__input"
                        placeholder="Título"
                        prop:value=campo(index, |b| b.titulo.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let titulo = texto_opcional(event_target_value(&ev));
                            editar_banners(form, |mut list| {
                                if let Some(b) = list.get_mut(index) {
                                    b.titulo = titulo;
                                }
                                list
                            });
                        }
                    />
                    <input
                        type="text"
                        class="form-group__input"
                        placeholder="Enlace (opcional)"
                        prop:value=campo(index, |b| b.enlace.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let enlace = texto_opcional(event_target_value(&ev));
                            editar_banners(form, |mut list| {
                                if let Some(b) = list.get_mut(index) {
                                    b.enlace = enlace;
                                }
                                list
                            });
                        }
                    />
                    <label class="form-group__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || banners.with(|b| b.get(index).is_some_and(|b| b.activo))
                            on:change=move |ev| {
                                let activo = event_target_checked(&ev);
                                editar_banners(form, |mut list| {
                                    if let Some(b) = list.get_mut(index) {
                                        b.activo = activo;
                                    }
                                    list
                                });
                            }
                        />
                        "Visible"
                    </label>
                </div>
                <div class="banner-row__actions">
                    <button
                        class="button button--icon"
                        title="Subir"
                        disabled=move || index == 0
                        on:click=move |_| editar_banners(form, |list| mover(list, index, -1))
                    >
                        {icon("arrow-up")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Bajar"
                        disabled=move || index + 1 >= filas.get()
                        on:click=move |_| editar_banners(form, |list| mover(list, index, 1))
                    >
                        {icon("arrow-down")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Quitar"
                        on:click=move |_| editar_banners(form, |list| quitar(list, index))
                    >
                        {icon("delete")}
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <div class="form-group">
            <label class="form-group__label">"Banners"</label>
            <div class="banner-list">
                {move || (0..filas.get()).map(fila).collect_view()}
            </div>
            <label class="button button--secondary image-grid__add">
                {icon("upload")}
                "Agregar banners"
                <input type="file" accept="image/*" multiple=true hidden=true on:change=on_pick />
            </label>
            {move || problema.get().map(|m| view! { <div class="form-group__error">{m}</div> })}
            {field_error(form, BANNERS_FIELD)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_clears_optional_fields() {
        assert_eq!(texto_opcional("   ".into()), None);
        assert_eq!(texto_opcional(" Verano ".into()), Some("Verano".to_string()));
    }
}
