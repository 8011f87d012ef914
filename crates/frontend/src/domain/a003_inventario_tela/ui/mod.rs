use contracts::domain::a001_proveedor::aggregate::Proveedores;
use contracts::domain::a002_tela::aggregate::Telas;
use contracts::domain::a003_inventario_tela::aggregate::{InventarioTela, InventarioTelas};
use contracts::domain::a003_inventario_tela::importe::compute_importe;
use contracts::shared::form::{parse_decimal, FieldSpec};
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::form::{field_input, FormCtx};
use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};
use crate::shared::number_format::format_money;

impl EntityUi for InventarioTelas {
    const PAGE_ID: &'static str = "a003_inventario_tela--list";

    fn columns() -> Vec<Column<InventarioTela>> {
        vec![
            Column::new("tela", "Tela", |i, l| l.label(Telas::KEY, i.tela_id).into()),
            Column::new("proveedor", "Proveedor", |i, l| {
                l.label(Proveedores::KEY, i.proveedor_id).into()
            }),
            Column::new("tipoTela", "Tipo", |i, _| i.tipo_tela.as_str().into()),
            Column::new("color", "Color", |i, _| i.color.as_str().into()),
            Column::new("presentacion", "Presentación", |i, _| i.presentacion.as_str().into()),
            Column::new("cantidadRollos", "Rollos", |i, _| CellValue::Int(i.cantidad_rollos)),
            Column::new("pesoGrupo", "Peso (kg)", |i, _| CellValue::Decimal(i.peso_grupo, 2)),
            Column::new("precioKG", "Precio/kg", |i, _| CellValue::Money(i.precio_kg)),
            Column::new("importe", "Importe", |i, _| CellValue::Money(i.importe)),
            Column::new("fechaCompra", "Compra", |i, _| CellValue::Date(i.fecha_compra)),
        ]
    }

    fn field_editor(field: &FieldSpec, form: FormCtx) -> Option<AnyView> {
        if field.name != "importe" {
            return None;
        }
        let input = field_input(field, form);
        let calculado = move || {
            let precio = parse_decimal(&form.get("precioKG")).ok().flatten();
            let peso = parse_decimal(&form.get("pesoGrupo")).ok().flatten();
            compute_importe(precio, peso, None)
        };
        Some(
            view! {
                <div class="form-group form-group--computed">
                    {input}
                    <div class="form-group__hint">
                        {move || match calculado() {
                            Some(importe) => format!("Calculado: {} (vacío = usar este valor)", format_money(importe)),
                            None => "Indique precio y peso para calcular el importe".to_string(),
                        }}
                    </div>
                </div>
            }
            .into_any(),
        )
    }
}

#[component]
pub fn InventarioTelaList() -> impl IntoView {
    crud_list_page::<InventarioTelas>()
}
