//! Category and subcategory selects; changing the category drops a
//! subcategory that does not belong to it.

use contracts::domain::a008_categoria::cascade::{reconcile_subcategoria, subcategorias_de};
use contracts::domain::a008_categoria::{Categoria, CategoriaParams, Categorias};
use contracts::shared::form::SelectOption;
use leptos::prelude::*;

use crate::shared::form::{field_error, select_input, FormCtx};
use crate::shared::hooks::use_crud;

const CATEGORIA: &str = "categoriaId";
const SUBCATEGORIA: &str = "subcategoriaId";

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Active categories, plus the selected one even if it was deactivated.
fn categoria_options(categorias: &[Categoria], actual: Option<i64>) -> Vec<SelectOption> {
    categorias
        .iter()
        .filter(|c| c.activo || Some(c.id) == actual)
        .map(|c| SelectOption::new(c.id.to_string(), c.nombre.clone()))
        .collect()
}

#[component]
pub fn CategoriaEditor(form: FormCtx) -> impl IntoView {
    let crud = use_crud::<Categorias>(Signal::derive(CategoriaParams::default));
    let categorias = Memo::new(move |_| crud.items());

    let on_categoria = move |ev| {
        let nueva = parse_id(&event_target_value(&ev));
        let actual = parse_id(&form.get_untracked(SUBCATEGORIA));
        let conservada = categorias.with_untracked(|c| reconcile_subcategoria(c, nueva, actual));
        form.set(CATEGORIA, nueva.map(|id| id.to_string()).unwrap_or_default());
        form.set(
            SUBCATEGORIA,
            conservada.map(|id| id.to_string()).unwrap_or_default(),
        );
    };

    let sub_options = Signal::derive(move || {
        let categoria = parse_id(&form.get(CATEGORIA));
        categorias.with(|c| {
            subcategorias_de(c, categoria)
                .into_iter()
                .map(|s| SelectOption::new(s.id.to_string(), s.nombre))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="form-group" class:form-group--invalid=move || form.error(CATEGORIA).is_some()>
            <label class="form-group__label">"Categoría"</label>
            <select
                class="form-group__input"
                prop:value=move || form.get(CATEGORIA)
                on:change=on_categoria
            >
                <option value="">"—"</option>
                {move || {
                    let actual = form.get(CATEGORIA);
                    categorias.with(|c| categoria_options(c, parse_id(&actual)))
                        .into_iter()
                        .map(|o| {
                            let selected = o.value == actual;
                            view! { <option value=o.value selected=selected>{o.label}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {field_error(form, CATEGORIA)}
        </div>
        <div class="form-group" class:form-group--invalid=move || form.error(SUBCATEGORIA).is_some()>
            <label class="form-group__label">"Subcategoría"</label>
            {select_input(form, SUBCATEGORIA, sub_options, Some("—"))}
            {field_error(form, SUBCATEGORIA)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categoria(id: i64, activo: bool) -> Categoria {
        Categoria {
            id,
            nombre: format!("Cat {}", id),
            descripcion: None,
            tienda_id: 1,
            activo,
            subcategorias: Vec::new(),
        }
    }

    #[test]
    fn inactive_categories_only_when_selected() {
        let cats = vec![categoria(1, true), categoria(2, false)];
        assert_eq!(categoria_options(&cats, None).len(), 1);
        assert_eq!(categoria_options(&cats, Some(2)).len(), 2);
    }

    #[test]
    fn blank_ids_parse_to_none() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id(" 7 "), Some(7));
    }
}
