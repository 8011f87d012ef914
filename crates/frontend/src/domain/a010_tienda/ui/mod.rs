use contracts::domain::a010_tienda::aggregate::{Tienda, Tiendas};
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};

impl EntityUi for Tiendas {
    const PAGE_ID: &'static str = "a010_tienda--list";

    fn columns() -> Vec<Column<Tienda>> {
        vec![
            Column::new("nombre", "Nombre", |t, _| t.nombre.as_str().into()),
            Column::new("ruc", "RUC", |t, _| t.ruc.clone().into()),
            Column::new("direccion", "Dirección", |t, _| t.direccion.clone().into()),
            Column::new("telefono", "Teléfono", |t, _| t.telefono.clone().into()),
            Column::new("email", "Email", |t, _| t.email.clone().into()),
            Column::new("activo", "Activa", |t, _| CellValue::Bool(t.activo)),
        ]
    }
}

#[component]
pub fn TiendaList() -> impl IntoView {
    crud_list_page::<Tiendas>()
}
