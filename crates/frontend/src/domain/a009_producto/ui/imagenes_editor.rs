use contracts::domain::a009_producto::imagenes::{
    check_nueva_imagen, parse_imagenes, serialize_imagenes, IMAGENES_FIELD,
};
use contracts::shared::config::MAX_PRODUCT_IMAGES;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::file_utils::{files_from_event, read_file};
use crate::shared::form::{field_error, FormCtx};
use crate::shared::icons::icon;

fn without(imagenes: &[String], index: usize) -> Vec<String> {
    imagenes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, src)| src.clone())
        .collect()
}

#[component]
pub fn ImagenesEditor(form: FormCtx) -> impl IntoView {
    let imagenes = Memo::new(move |_| parse_imagenes(&form.get(IMAGENES_FIELD)));
    let problema = RwSignal::new(None::<String>);

    let on_pick = move |ev: web_sys::Event| {
        let files = files_from_event(&ev);
        problema.set(None);
        spawn_local(async move {
            for file in files {
                let picked = match read_file(&file).await {
                    Ok(picked) => picked,
                    Err(e) => {
                        log::warn!("image read failed: {}", e);
                        problema.set(Some(e));
                        continue;
                    }
                };
                let mut actuales = parse_imagenes(&form.get_untracked(IMAGENES_FIELD));
                match check_nueva_imagen(actuales.len(), picked.bytes.len(), &picked.mime) {
                    Ok(()) => {
                        actuales.push(picked.data_uri());
                        form.set(IMAGENES_FIELD, serialize_imagenes(&actuales));
                    }
                    Err(motivo) => problema.set(Some(format!("{}: {}", picked.name, motivo))),
                }
            }
        });
    };

    let quitar = move |index: usize| {
        let restantes = imagenes.with_untracked(|list| without(list, index));
        form.set(IMAGENES_FIELD, serialize_imagenes(&restantes));
    };

    view! {
        <div class="form-group">
            <label class="form-group__label">
                {move || format!("Imágenes ({}/{})", imagenes.with(Vec::len), MAX_PRODUCT_IMAGES)}
            </label>
            <div class="image-grid">
                {move || imagenes.get().into_iter().enumerate().map(|(index, src)| view! {
                    <div class="image-grid__item">
                        <img class="image-grid__thumb" src=src alt="" />
                        <button
                            class="button button--icon button--danger image-grid__remove"
                            title="Quitar"
                            on:click=move |_| quitar(index)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }).collect_view()}
            </div>
            <Show when=move || imagenes.with(|list| list.len() < MAX_PRODUCT_IMAGES)>
                <label class="button button--secondary image-grid__add">
                    {icon("upload")}
                    "Agregar imágenes"
                    <input type="file" accept="image/*" multiple=true hidden=true on:change=on_pick />
                </label>
            </Show>
            {move || problema.get().map(|message| view! { <div class="form-group__error">{message}</div> })}
            {field_error(form, IMAGENES_FIELD)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_keeps_order_of_the_rest() {
        let list = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(without(&list, 1), vec!["a".to_string(), "c".to_string()]);
        assert_eq!(without(&list, 9).len(), 3);
    }
}
