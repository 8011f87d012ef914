mod lineas_editor;

use contracts::domain::a009_producto::aggregate::Productos;
use contracts::domain::a011_sucursal::aggregate::Sucursales;
use contracts::domain::a014_venta::aggregate::{EstadoVenta, UpdateVentaDto, Venta, Ventas};
use contracts::shared::form::FormEnum;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::form::FormCtx;
use crate::shared::hooks::CrudHandle;
use crate::shared::list::{alert, confirm, crud_list_page, CellValue, Column, EntityUi, Tone};

use lineas_editor::LineasEditor;

impl EntityUi for Ventas {
    const PAGE_ID: &'static str = "a014_venta--list";
    const LOOKUPS: &'static [&'static str] = &[Productos::KEY];

    fn columns() -> Vec<Column<Venta>> {
        vec![
            Column::new("id", "N°", |v, _| CellValue::Int(v.id)),
            Column::new("fecha", "Fecha", |v, _| CellValue::Date(Some(v.fecha))),
            Column::new("cliente", "Cliente", |v, _| v.cliente.clone().into()),
            Column::new("sucursal", "Sucursal", |v, l| {
                l.opt_label(Sucursales::KEY, v.sucursal_id).into()
            }),
            Column::new("metodoPago", "Pago", |v, _| v.metodo_pago.label().into()),
            Column::new("unidades", "Unidades", |v, _| CellValue::Int(v.unidades())),
            Column::new("total", "Total", |v, _| CellValue::Money(v.total)),
            Column::new("estado", "Estado", |v, _| {
                let tone = match v.estado {
                    EstadoVenta::Completada => Tone::Success,
                    EstadoVenta::Anulada => Tone::Danger,
                };
                CellValue::Badge(v.estado.label().to_string(), tone)
            }),
        ]
    }

    fn extra_editor(form: FormCtx) -> Option<AnyView> {
        Some(view! { <LineasEditor form=form /> }.into_any())
    }

    fn row_actions(venta: &Venta, crud: CrudHandle<Self>) -> Option<AnyView> {
        if !venta.es_valida() {
            return None;
        }
        let id = venta.id;
        let label = Ventas::label(venta);
        let anular = move |_| {
            if !confirm(&format!("¿Anular {}?", label)) {
                return;
            }
            spawn_local(async move {
                if let Err(e) = crud.update(id, UpdateVentaDto::anular()).await {
                    alert(&format!("No se pudo anular la venta: {}", e));
                }
            });
        };
        Some(
            view! {
                <button
                    class="button button--small button--danger"
                    disabled=move || crud.is_updating.get()
                    on:click=anular
                >
                    "Anular"
                </button>
            }
            .into_any(),
        )
    }
}

#[component]
pub fn VentaList() -> impl IntoView {
    crud_list_page::<Ventas>()
}
