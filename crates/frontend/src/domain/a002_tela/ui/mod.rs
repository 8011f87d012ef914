use contracts::domain::a001_proveedor::aggregate::Proveedores;
use contracts::domain::a002_tela::aggregate::{Tela, Telas};
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};

impl EntityUi for Telas {
    const PAGE_ID: &'static str = "a002_tela--list";

    fn columns() -> Vec<Column<Tela>> {
        vec![
            Column::new("nombreComercial", "Nombre comercial", |t, _| {
                t.nombre_comercial.as_str().into()
            }),
            Column::new("tipoTela", "Tipo", |t, _| t.tipo_tela.as_str().into()),
            Column::new("composicion", "Composición", |t, _| t.composicion.clone().into()),
            Column::new("gramaje", "Gramaje (g/m²)", |t, _| match t.gramaje {
                Some(g) => CellValue::Decimal(g, 0),
                None => CellValue::Text(String::new()),
            }),
            Column::new("color", "Color", |t, _| t.color.clone().into()),
            Column::new("proveedor", "Proveedor", |t, l| {
                l.label(Proveedores::KEY, t.proveedor_id).into()
            }),
        ]
    }
}

#[component]
pub fn TelaList() -> impl IntoView {
    crud_list_page::<Telas>()
}
