use contracts::domain::a001_proveedor::aggregate::{Proveedor, Proveedores};
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};

impl EntityUi for Proveedores {
    const PAGE_ID: &'static str = "a001_proveedor--list";

    fn columns() -> Vec<Column<Proveedor>> {
        vec![
            Column::new("nombre", "Nombre", |p, _| p.nombre.as_str().into()),
            Column::new("ruc", "RUC", |p, _| p.ruc.clone().into()),
            Column::new("contacto", "Contacto", |p, _| p.contacto.clone().into()),
            Column::new("telefono", "Teléfono", |p, _| p.telefono.clone().into()),
            Column::new("email", "Email", |p, _| p.email.clone().into()),
            Column::new("activo", "Activo", |p, _| CellValue::Bool(p.activo)),
        ]
    }
}

#[component]
pub fn ProveedorList() -> impl IntoView {
    crud_list_page::<Proveedores>()
}
