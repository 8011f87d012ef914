use contracts::domain::a010_tienda::aggregate::Tiendas;
use contracts::domain::a011_sucursal::aggregate::{Sucursal, Sucursales};
use contracts::shared::resource::Resource;
use leptos::prelude::*;

use crate::shared::list::{crud_list_page, CellValue, Column, EntityUi};

impl EntityUi for Sucursales {
    const PAGE_ID: &'static str = "a011_sucursal--list";

    fn columns() -> Vec<Column<Sucursal>> {
        vec![
            Column::new("nombre", "Nombre", |s, _| s.nombre.as_str().into()),
            Column::new("tienda", "Tienda", |s, l| l.label(Tiendas::KEY, s.tienda_id).into()),
            Column::new("direccion", "Dirección", |s, _| s.direccion.as_str().into()),
            Column::new("telefono", "Teléfono", |s, _| s.telefono.clone().into()),
            Column::new("activo", "Activa", |s, _| CellValue::Bool(s.activo)),
        ]
    }
}

#[component]
pub fn SucursalList() -> impl IntoView {
    crud_list_page::<Sucursales>()
}
