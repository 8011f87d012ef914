mod detalle;

use contracts::domain::a009_producto::aggregate::Productos;
use contracts::domain::a015_carrito::aggregate::{Carrito, CarritoFilters, Carritos, EstadoPedido};
use contracts::shared::config::{LIST_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use contracts::shared::form::FormEnum;
use contracts::shared::page::paginate;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_datetime;
use crate::shared::export::{csv_filename, export_table};
use crate::shared::hooks::{use_crud, use_debounced};
use crate::shared::icons::icon;
use crate::shared::list::{
    alert, build_rows, confirm_and_delete, filter_list, get_sort_indicator, sort_list, CellValue,
    Column, ListRow, ListState, PaginationControls, SearchInput, Tone,
};
use crate::shared::lookups::use_lookups;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

use detalle::CarritoDetalle;

const PAGE_ID: &str = "a015_carrito--list";

pub fn estado_tone(estado: EstadoPedido) -> Tone {
    match estado {
        EstadoPedido::Pendiente => Tone::Warning,
        EstadoPedido::Confirmado => Tone::Informative,
        EstadoPedido::Enviado => Tone::Informative,
        EstadoPedido::Entregado => Tone::Success,
        EstadoPedido::Cancelado => Tone::Danger,
    }
}

fn columns() -> Vec<Column<Carrito>> {
    vec![
        Column::new("id", "N°", |c, _| CellValue::Int(c.id)),
        Column::new("createdAt", "Fecha", |c, _| {
            c.created_at.as_ref().map(format_datetime).into()
        }),
        Column::new("cliente", "Cliente", |c, _| c.cliente_nombre.as_str().into()),
        Column::new("telefono", "Teléfono", |c, _| c.cliente_telefono.clone().into()),
        Column::new("items", "Artículos", |c, _| {
            CellValue::Int(c.items.iter().map(|i| i.cantidad).sum())
        }),
        Column::new("total", "Total", |c, _| CellValue::Money(c.total)),
        Column::new("estado", "Estado", |c, _| {
            CellValue::Badge(c.estado.label().to_string(), estado_tone(c.estado))
        }),
    ]
}

fn filtro_estado(raw: &str) -> CarritoFilters {
    CarritoFilters {
        estado: EstadoPedido::from_code(raw),
    }
}

/// Orders placed from the web store: read, move through their states, delete.
#[component]
pub fn CarritoList() -> impl IntoView {
    let estado = RwSignal::new(String::new());
    let crud = use_crud::<Carritos>(Signal::derive(move || filtro_estado(&estado.get())));
    let lookups = use_lookups(&[Productos::KEY]);

    let search = RwSignal::new(String::new());
    let filter = use_debounced::<String>(search.into(), SEARCH_DEBOUNCE_MS);
    let sort_field = RwSignal::new(String::new());
    let sort_ascending = RwSignal::new(true);
    let page = RwSignal::new(0usize);
    let abierto = RwSignal::new(None::<Carrito>);
    let columns = StoredValue::new(columns());

    Effect::new(move |_| {
        filter.track();
        estado.track();
        page.set(0);
    });

    let rows = Memo::new(move |_| {
        let items = crud.items();
        let mut rows = lookups.with(|l| columns.with_value(|cols| build_rows::<Carritos>(items, cols, l)));
        rows = filter_list(rows, &filter.get());
        let field = sort_field.get();
        if !field.is_empty() {
            sort_list(&mut rows, &field, sort_ascending.get());
        }
        rows
    });
    let visible = Memo::new(move |_| rows.with(|r| paginate(r, page.get(), LIST_PAGE_SIZE)));

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    let export = move |_| {
        let headers: Vec<&str> = columns.with_value(|cols| cols.iter().map(|c| c.title).collect());
        let data: Vec<Vec<String>> = rows.with_untracked(|r| r.iter().map(ListRow::csv_row).collect());
        if let Err(e) = export_table(&headers, &data, &csv_filename(Carritos::LIST_NAME)) {
            alert(&e);
        }
    };

    let close = Callback::new(move |_| abierto.set(None));

    view! {
        <PageFrame page_id=PAGE_ID category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Carritos::LIST_NAME}</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="form-group__input"
                        prop:value=move || estado.get()
                        on:change=move |ev| estado.set(event_target_value(&ev))
                    >
                        <option value="">"Todos los estados"</option>
                        {EstadoPedido::options().into_iter().map(|o| view! {
                            <option value=o.value>{o.label}</option>
                        }).collect_view()}
                    </select>
                    <SearchInput value=search placeholder="Buscar cliente..." />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| crud.refetch()>
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=export>
                        {icon("download")}
                        "Excel"
                    </Button>
                </div>
            </div>

            <ListState
                loading=crud.is_loading
                error=crud.error
                empty=Signal::derive(move || rows.with(|r| r.is_empty()))
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.with_value(|cols| cols.iter().map(|c| {
                                let field = c.field;
                                let title = c.title;
                                view! {
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=move |_| toggle_sort(field)
                                    >
                                        {title}
                                        {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                                    </th>
                                }
                            }).collect_view())}
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible.get().0.into_iter().map(|row| {
                            let para_ver = row.entity.clone();
                            let para_borrar = row.entity.clone();
                            view! {
                                <tr class="table__row">
                                    {row.cells.iter().map(|(_, value)| view! {
                                        <td class="table__cell" class:table__cell--number=value.is_numeric()>
                                            {value.view()}
                                        </td>
                                    }).collect_view()}
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            title="Ver pedido"
                                            on:click=move |_| abierto.set(Some(para_ver.clone()))
                                        >
                                            {icon("eye")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Eliminar"
                                            disabled=move || crud.is_deleting.get()
                                            on:click=move |_| {
                                                let id = para_borrar.id;
                                                confirm_and_delete(
                                                    Carritos::ELEMENT_NAME,
                                                    &Carritos::label(&para_borrar),
                                                    move || crud.delete(id),
                                                );
                                            }
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                page=page
                total_pages=Signal::derive(move || visible.with(|v| v.1))
                total_count=Signal::derive(move || rows.with(|r| r.len()))
            />

            {move || abierto.get().map(|carrito| view! {
                <Modal title=Carritos::label(&carrito) on_close=close>
                    <CarritoDetalle carrito=carrito crud=crud lookups=lookups on_done=close />
                </Modal>
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filter_lists_every_state() {
        assert_eq!(filtro_estado("").estado, None);
        assert_eq!(filtro_estado("ENVIADO").estado, Some(EstadoPedido::Enviado));
    }
}
