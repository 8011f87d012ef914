//! Sale lines kept as JSON text in the form while editing.

use contracts::domain::a009_producto::aggregate::{ProductoFilters, Productos};
use contracts::domain::a014_venta::lineas::{
    parse_lineas, serialize_lineas, total_lineas, LineaInput, ITEMS_FIELD,
};
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::form::{field_error, FormCtx};
use crate::shared::hooks::use_crud;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;

fn edit_lineas(form: FormCtx, edit: impl FnOnce(&mut Vec<LineaInput>)) {
    let mut lineas = parse_lineas(&form.get_untracked(ITEMS_FIELD));
    edit(&mut lineas);
    form.set(ITEMS_FIELD, serialize_lineas(&lineas));
}

/// Picking a product fills an empty price with its current price.
fn elegir_producto(linea: &mut LineaInput, producto_id: String, precio: Option<f64>) {
    linea.producto_id = producto_id;
    if linea.precio_unitario.trim().is_empty() {
        if let Some(precio) = precio {
            linea.precio_unitario = precio.to_string();
        }
    }
}

#[component]
pub fn LineasEditor(form: FormCtx) -> impl IntoView {
    let productos = use_crud::<Productos>(Signal::derive(ProductoFilters::default));
    let lineas = Memo::new(move |_| parse_lineas(&form.get(ITEMS_FIELD)));
    // rows are rebuilt only when their count changes so inputs keep focus
    let filas = Memo::new(move |_| lineas.with(Vec::len));

    let campo = move |index: usize, get: fn(&LineaInput) -> String| {
        move || lineas.with(|l| l.get(index).map(get).unwrap_or_default())
    };

    let on_producto = move |index: usize, raw: String| {
        let precio = raw.parse::<i64>().ok().and_then(|id| {
            productos.data.with_untracked(|data| {
                data.as_ref()
                    .and_then(|page| page.items.iter().find(|p| Productos::id(p) == id))
                    .map(|p| p.precio_vigente())
            })
        });
        edit_lineas(form, |l| {
            if let Some(linea) = l.get_mut(index) {
                elegir_producto(linea, raw, precio);
            }
        });
    };

    let fila = move |index: usize| {
        let opciones = move || {
            let actual = campo(index, |l| l.producto_id.clone())();
            form.lookups.with(|l| {
                l.options(Productos::KEY)
                    .iter()
                    .map(|o| {
                        let selected = o.value == actual;
                        view! { <option value=o.value.clone() selected=selected>{o.label.clone()}</option> }
                    })
                    .collect_view()
            })
        };
        view! {
            <tr class="table__row">
                <td class="table__cell">
                    <select
                        class="form-group__input"
                        prop:value=campo(index, |l| l.producto_id.clone())
                        on:change=move |ev| on_producto(index, event_target_value(&ev))
                    >
                        <option value="">"Seleccione..."</option>
                        {opciones}
                    </select>
                </td>
                <td class="table__cell">
                    <input
                        type="number"
                        min="1"
                        step="1"
                        class="form-group__input"
                        prop:value=campo(index, |l| l.cantidad.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_lineas(form, |l| if let Some(linea) = l.get_mut(index) { linea.cantidad = value; });
                        }
                    />
                </td>
                <td class="table__cell">
                    <input
                        type="number"
                        min="0"
                        step="any"
                        class="form-group__input"
                        prop:value=campo(index, |l| l.precio_unitario.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_lineas(form, |l| if let Some(linea) = l.get_mut(index) { linea.precio_unitario = value; });
                        }
                    />
                </td>
                <td class="table__cell table__cell--number">
                    {move || lineas.with(|l| {
                        l.get(index).and_then(LineaInput::subtotal).map(format_money).unwrap_or_default()
                    })}
                </td>
                <td class="table__cell table__cell--actions">
                    <button
                        class="button button--icon button--danger"
                        title="Quitar línea"
                        disabled=move || filas.get() <= 1
                        on:click=move |_| edit_lineas(form, |l| {
                            if index < l.len() {
                                l.remove(index);
                            }
                        })
                    >
                        {icon("delete")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <div class="form-group">
            <label class="form-group__label">"Productos vendidos *"</label>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Producto"</th>
                        <th class="table__header-cell">"Cantidad"</th>
                        <th class="table__header-cell">"Precio unit."</th>
                        <th class="table__header-cell">"Subtotal"</th>
                        <th class="table__header-cell"></th>
                    </tr>
                </thead>
                <tbody>
                    {move || (0..filas.get()).map(fila).collect_view()}
                </tbody>
            </table>
            <div class="details-actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| edit_lineas(form, |l| l.push(LineaInput::default()))
                >
                    {icon("plus")}
                    "Agregar línea"
                </button>
                <strong class="form-group__total">
                    {move || format!("Total: {}", format_money(lineas.with(|l| total_lineas(l))))}
                </strong>
            </div>
            {field_error(form, ITEMS_FIELD)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_price_only_fills_empty_price() {
        let mut linea = LineaInput::default();
        elegir_producto(&mut linea, "4".into(), Some(35.5));
        assert_eq!(linea.producto_id, "4");
        assert_eq!(linea.precio_unitario, "35.5");

        elegir_producto(&mut linea, "5".into(), Some(20.0));
        assert_eq!(linea.producto_id, "5");
        assert_eq!(linea.precio_unitario, "35.5");
    }
}
